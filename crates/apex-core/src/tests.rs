#[cfg(test)]
mod tests {
    use crate::commands::PursuitCommand;
    use crate::config::PursuitConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::PursuitEvent;
    use crate::state::{PursuitSnapshot, PursuitState};
    use crate::types::{ImpactReport, SimTime, WantedStars};

    #[test]
    fn test_offense_kind_serde() {
        for kind in OffenseKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: OffenseKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
        assert_eq!(
            serde_json::to_string(&OffenseKind::HitPedestrian).unwrap(),
            "\"hit_pedestrian\""
        );
    }

    #[test]
    fn test_offense_kind_from_name() {
        assert_eq!(OffenseKind::from_name("speeding"), Some(OffenseKind::Speeding));
        assert_eq!(
            OffenseKind::from_name("Hit_Pedestrian"),
            Some(OffenseKind::HitPedestrian)
        );
        assert_eq!(
            OffenseKind::from_name("property-damage"),
            Some(OffenseKind::PropertyDamage)
        );
        assert_eq!(OffenseKind::from_name("jaywalking"), None);
    }

    #[test]
    fn test_impact_target_from_name() {
        assert_eq!(ImpactTarget::from_name("CAR"), Some(ImpactTarget::Vehicle));
        assert_eq!(ImpactTarget::from_name("prop"), Some(ImpactTarget::Prop));
        assert_eq!(ImpactTarget::from_name("tree"), None);
    }

    // ---- WantedStars ----

    #[test]
    fn test_wanted_stars_saturate() {
        assert_eq!(WantedStars::saturating(9), WantedStars::MAX);
        assert_eq!(WantedStars::MAX.increment(), WantedStars::MAX);
        assert_eq!(WantedStars::CLEAR.decrement(), WantedStars::CLEAR);
        assert_eq!(WantedStars::saturating(2).increment().get(), 3);
    }

    #[test]
    fn test_wanted_stars_raise_never_lowers() {
        let three = WantedStars::saturating(3);
        assert_eq!(three.raise_to(1), three);
        assert_eq!(WantedStars::CLEAR.raise_to(1).get(), 1);
        assert_eq!(three.raise_to(200), WantedStars::MAX);
    }

    #[test]
    fn test_wanted_stars_rejects_out_of_range_json() {
        let ok: WantedStars = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<WantedStars>("6").is_err());
        assert_eq!(serde_json::to_string(&WantedStars::MAX).unwrap(), "5");
    }

    #[test]
    fn test_wanted_stars_display() {
        assert_eq!(WantedStars::saturating(2).to_string(), "2/5");
    }

    // ---- Time and impacts ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_impact_speed() {
        let report = ImpactReport::new(ImpactTarget::Prop, glam::DVec3::new(3.0, 4.0, 0.0));
        assert!((report.speed() - 5.0).abs() < 1e-12);
        let head_on = ImpactReport::with_speed(ImpactTarget::Vehicle, 22.0);
        assert!((head_on.speed() - 22.0).abs() < 1e-12);
    }

    // ---- Wire shapes ----

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PursuitCommand::RegisterOffense {
            kind: OffenseKind::Collision,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"RegisterOffense\""));
        let back: PursuitCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);

        let escape: PursuitCommand = serde_json::from_str(r#"{"type":"Escape"}"#).unwrap();
        assert_eq!(escape, PursuitCommand::Escape);

        let impact: PursuitCommand = serde_json::from_str(
            r#"{"type":"ReportImpact","report":{"target":"prop","relative_velocity":[0.0,20.0,0.0]}}"#,
        )
        .unwrap();
        match impact {
            PursuitCommand::ReportImpact { report } => {
                assert_eq!(report.target, ImpactTarget::Prop);
                assert!((report.speed() - 20.0).abs() < 1e-12);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = PursuitSnapshot {
            wanted_stars: WantedStars::saturating(2),
            intensity: 40.0,
            under_chase: true,
            events: vec![
                PursuitEvent::StarGained {
                    stars: WantedStars::saturating(2),
                },
                PursuitEvent::SirenOn {
                    trigger: SirenTrigger::Wanted,
                },
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"wanted_stars\":2"));
        assert!(json.contains("\"type\":\"StarGained\""));
        let back: PursuitSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
    }

    #[test]
    fn test_default_state_consistent() {
        let state = PursuitState::default();
        assert!(state.is_consistent());
        assert!(!state.under_chase);

        let broken = PursuitState {
            intensity: 5.0,
            ..Default::default()
        };
        assert!(!broken.is_consistent());
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults() {
        let config = PursuitConfig::default();
        assert_eq!(config.intensity_decay_rate, INTENSITY_DECAY_RATE);
        assert_eq!(config.star_cooldown_secs, STAR_COOLDOWN_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = PursuitConfig::from_json_str(r#"{"star_cooldown_secs": 5.0}"#).unwrap();
        assert_eq!(config.star_cooldown_secs, 5.0);
        assert_eq!(config.intensity_decay_rate, INTENSITY_DECAY_RATE);
        assert_eq!(config.siren_duration_secs, SIREN_DURATION_SECS);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = PursuitConfig::from_json_str(r#"{"star_cooldown_secs": 0.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "star_cooldown_secs",
                ..
            }
        ));

        let err = PursuitConfig::from_json_str(r#"{"intensity_decay_rate": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotNonNegative { .. }));

        let err = PursuitConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = PursuitConfig::load(std::path::Path::new("/nonexistent/pursuit.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pursuit.json"));
    }
}
