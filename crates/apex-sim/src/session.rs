//! Pursuit session: the outward-facing wanted-level object.
//!
//! `PursuitSession` owns the pursuit state and is the only thing that mutates
//! it. The gameplay layer calls `register_offense` / `report_impact`
//! synchronously and `tick` once per frame; HUD and audio read the plain
//! accessors or poll the snapshot returned by `step`. No globals: whoever runs
//! the gameplay loop owns the session.

use std::collections::VecDeque;

use tracing::{debug, info};

use apex_core::commands::PursuitCommand;
use apex_core::config::PursuitConfig;
use apex_core::constants::{DT, MAX_TICK_SECS};
use apex_core::enums::{OffenseKind, SirenTrigger};
use apex_core::error::ConfigResult;
use apex_core::events::PursuitEvent;
use apex_core::state::{PursuitSnapshot, PursuitState};
use apex_core::types::{ImpactReport, SimTime, WantedStars};
use apex_escalation::accumulator::{Decay, IntensityAccumulator};
use apex_escalation::classifier::classify;
use apex_escalation::impact::{classify_impact, is_crash, ImpactThresholds};
use apex_escalation::policy::{CooldownContext, EscalationPolicy};

use crate::siren::SirenController;

pub struct PursuitSession {
    config: PursuitConfig,
    policy: EscalationPolicy,
    thresholds: ImpactThresholds,
    time: SimTime,
    stars: WantedStars,
    intensity: IntensityAccumulator,
    under_chase: bool,
    last_offense_secs: Option<f64>,
    /// Start of the current quiet window for star cooldown.
    cooldown_anchor_secs: f64,
    siren: SirenController,
    command_queue: VecDeque<PursuitCommand>,
    events: Vec<PursuitEvent>,
}

impl Default for PursuitSession {
    fn default() -> Self {
        Self::with_config(PursuitConfig::default())
    }
}

impl PursuitSession {
    /// Create a session after validating the config.
    pub fn new(config: PursuitConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: PursuitConfig) -> Self {
        Self {
            policy: EscalationPolicy::from_config(&config),
            thresholds: ImpactThresholds::from_config(&config),
            config,
            time: SimTime::default(),
            stars: WantedStars::CLEAR,
            intensity: IntensityAccumulator::new(),
            under_chase: false,
            last_offense_secs: None,
            cooldown_anchor_secs: 0.0,
            siren: SirenController::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    // --- Reads ---

    pub fn config(&self) -> &PursuitConfig {
        &self.config
    }

    pub fn wanted_stars(&self) -> WantedStars {
        self.stars
    }

    pub fn intensity(&self) -> f64 {
        self.intensity.value()
    }

    pub fn under_chase(&self) -> bool {
        self.under_chase
    }

    pub fn siren_active(&self) -> bool {
        self.siren.is_active()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn state(&self) -> PursuitState {
        PursuitState {
            wanted_stars: self.stars,
            intensity: self.intensity.value(),
            under_chase: self.under_chase,
            last_offense_secs: self.last_offense_secs,
        }
    }

    /// Snapshot of the current state without draining pending events.
    pub fn snapshot(&self) -> PursuitSnapshot {
        PursuitSnapshot {
            time: self.time,
            wanted_stars: self.stars,
            intensity: self.intensity.value(),
            under_chase: self.under_chase,
            siren_active: self.siren.is_active(),
            secs_since_offense: self
                .last_offense_secs
                .map(|at| self.time.elapsed_secs - at),
            events: Vec::new(),
        }
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PursuitEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Offenses ---

    /// Register a crime and escalate the wanted level.
    pub fn register_offense(&mut self, kind: OffenseKind) {
        let now = self.time.elapsed_secs;
        let was_chasing = self.under_chase;
        let before = self.stars;

        self.last_offense_secs = Some(now);
        self.cooldown_anchor_secs = now;

        let profile = classify(kind);
        self.intensity.accumulate(profile.intensity_delta);
        self.stars = self
            .policy
            .escalate(before, &profile, self.intensity.value());
        self.sync_chase_flag();

        if !was_chasing && self.under_chase {
            self.events.push(PursuitEvent::ChaseStarted);
        }
        self.events.push(PursuitEvent::OffenseRegistered {
            kind,
            intensity: self.intensity.value(),
            stars: self.stars,
        });
        debug!(
            ?kind,
            intensity = self.intensity.value(),
            stars = %self.stars,
            "offense registered"
        );

        if self.stars > before {
            info!(stars = %self.stars, "wanted level raised");
            self.events
                .push(PursuitEvent::StarGained { stars: self.stars });
        }

        if !self.stars.is_clear() && self.siren.force_on(self.config.siren_duration_secs) {
            self.siren_on(SirenTrigger::Wanted);
        }
    }

    /// Classify a physical contact, run the crash siren rule, and register the
    /// resulting offense. Returns the offense, if the impact was one.
    pub fn report_impact(&mut self, report: &ImpactReport) -> Option<OffenseKind> {
        if is_crash(report, &self.thresholds)
            && self.siren.trigger(self.config.siren_duration_secs)
        {
            self.siren_on(SirenTrigger::Crash);
        }

        let offense = classify_impact(report, &self.thresholds);
        if let Some(kind) = offense {
            self.register_offense(kind);
        }
        offense
    }

    /// The player lost the cops. Clears all pursuit state unconditionally.
    pub fn escape(&mut self) {
        let was_chasing = self.under_chase;

        self.stars = WantedStars::CLEAR;
        self.intensity.clear();
        self.under_chase = false;
        self.last_offense_secs = None;
        self.cooldown_anchor_secs = self.time.elapsed_secs;

        if self.siren.stop() {
            self.siren_off();
        }
        if was_chasing {
            info!("pursuit evaded");
            self.events.push(PursuitEvent::Escaped);
        }
    }

    /// Tear the session down to its initial state, clock included.
    pub fn reset(&mut self) {
        self.escape();
        self.time = SimTime::default();
        self.cooldown_anchor_secs = 0.0;
        self.events.clear();
    }

    // --- Time ---

    /// Advance the session by `dt` seconds. Non-finite or negative steps count as
    /// zero; steps longer than `MAX_TICK_SECS` are capped.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt.min(MAX_TICK_SECS)
        } else {
            0.0
        };
        let step_start = self.time.elapsed_secs;
        self.time.advance(dt);

        if self.under_chase {
            self.decay_and_cool_down(step_start, dt);
        }

        if self.siren.tick(dt) {
            self.siren_off();
        }

        let was_chasing = self.under_chase;
        self.sync_chase_flag();
        if was_chasing && !self.under_chase {
            info!("chase ended");
            self.events.push(PursuitEvent::ChaseEnded);
        }
    }

    fn decay_and_cool_down(&mut self, step_start: f64, dt: f64) {
        if let Decay::ReachedZero { secs_into_step } =
            self.intensity.decay(dt, self.config.intensity_decay_rate)
        {
            self.cooldown_anchor_secs = step_start + secs_into_step;
        }

        let update = self.policy.cool_down(&CooldownContext {
            stars: self.stars,
            intensity_is_zero: self.intensity.is_zero(),
            now_secs: self.time.elapsed_secs,
            anchor_secs: self.cooldown_anchor_secs,
        });

        self.cooldown_anchor_secs = update.new_anchor_secs;
        for _ in 0..update.stars_lost {
            self.stars = self.stars.decrement();
            info!(stars = %self.stars, "star lost");
            self.events.push(PursuitEvent::StarLost { stars: self.stars });
        }
    }

    // --- Commands ---

    /// Queue a command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PursuitCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PursuitCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, advance one fixed tick, and return the snapshot
    /// carrying every event emitted since the previous step.
    pub fn step(&mut self) -> PursuitSnapshot {
        self.process_commands();
        self.tick(DT);

        let mut snapshot = self.snapshot();
        snapshot.events = self.drain_events();
        snapshot
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PursuitCommand) {
        match command {
            PursuitCommand::RegisterOffense { kind } => self.register_offense(kind),
            PursuitCommand::ReportImpact { report } => {
                self.report_impact(&report);
            }
            PursuitCommand::Escape => self.escape(),
            PursuitCommand::Reset => self.reset(),
        }
    }

    // --- Internals ---

    fn sync_chase_flag(&mut self) {
        self.under_chase = !self.stars.is_clear() || !self.intensity.is_zero();
    }

    fn siren_on(&mut self, trigger: SirenTrigger) {
        debug!(?trigger, "sirens on");
        self.events.push(PursuitEvent::SirenOn { trigger });
    }

    fn siren_off(&mut self) {
        debug!("sirens off");
        self.events.push(PursuitEvent::SirenOff);
    }
}
