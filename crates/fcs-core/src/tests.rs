#[cfg(test)]
mod tests {
    use crate::commands::OperatorCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::FcsError;
    use crate::events::LogEntry;
    use crate::types::*;

    #[test]
    fn test_threat_level_bands() {
        assert_eq!(ThreatLevel::from_score(95.0), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_score(70.5), ThreatLevel::High);
        // Thresholds are strict.
        assert_eq!(ThreatLevel::from_score(70.0), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_score(41.0), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_score(40.0), ThreatLevel::Low);
        assert_eq!(ThreatLevel::from_score(0.0), ThreatLevel::Low);
    }

    #[test]
    fn test_base_threat_by_class() {
        assert_eq!(TargetClass::Armor.base_threat(), 80.0);
        assert_eq!(TargetClass::RotaryWing.base_threat(), 70.0);
        assert_eq!(TargetClass::InfantryCarrier.base_threat(), 60.0);
        assert_eq!(TargetClass::Unmanned.base_threat(), 40.0);
        assert_eq!(TargetClass::LightVehicle.base_threat(), 30.0);
        for class in TargetClass::ALL {
            assert!(class.base_threat() <= THREAT_MAX);
        }
    }

    #[test]
    fn test_ammo_profiles() {
        let he = AmmoType::He.profile();
        assert_eq!(he.muzzle_velocity, 900.0);
        assert_eq!(he.mass_kg, 23.0);

        let velocities: Vec<f64> = AmmoType::ALL
            .iter()
            .map(|a| a.profile().muzzle_velocity)
            .collect();
        assert_eq!(velocities, vec![1750.0, 1140.0, 900.0, 700.0]);
        assert_eq!(AmmoType::default(), AmmoType::Apfsds);
        assert_eq!(AmmoType::Heat.label(), "HEAT");
    }

    #[test]
    fn test_planar_position_polar_consistency() {
        let pos = PlanarPosition::from_polar(5.0, std::f64::consts::FRAC_PI_2);
        assert!(pos.x_km.abs() < 1e-12);
        assert!((pos.y_km - 5.0).abs() < 1e-12);
        assert!((pos.distance_km() - 5.0).abs() < 1e-12);
        assert!((pos.bearing_deg() - 90.0).abs() < 1e-10);

        // atan2 convention: the lower half-plane yields negative bearings.
        let below = PlanarPosition::new(1.0, -1.0);
        assert!((below.bearing_deg() + 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_target_velocity_from_heading() {
        let state = TargetState {
            id: TargetId(1),
            class: TargetClass::Armor,
            position: PlanarPosition::new(1.0, 0.0),
            heading_rad: std::f64::consts::PI,
            speed_mps: 20.0,
            distance_km: 1.0,
            bearing_deg: 0.0,
            elevation_deg: 0.0,
            threat: 50.0,
        };
        let v = state.velocity();
        assert!((v.x + 20.0).abs() < 1e-10);
        assert!(v.y.abs() < 1e-10);
    }

    #[test]
    fn test_target_id_label() {
        assert_eq!(TargetId(1).to_string(), "TGT-001");
        assert_eq!(TargetId(42).to_string(), "TGT-042");
        assert_eq!(TargetId(1234).to_string(), "TGT-1234");
    }

    #[test]
    fn test_clock_formatting() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(59.9), "00:00:59");
        assert_eq!(format_clock(3725.0), "01:02:05");
        assert_eq!(format_clock(-3.0), "00:00:00");

        let entry = LogEntry {
            level: LogLevel::Info,
            tick: 0,
            time_secs: 61.0,
            message: "Target TGT-001 LOCKED".into(),
        };
        assert_eq!(entry.render(), "[00:01:01] Target TGT-001 LOCKED");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..FRAME_RATE {
            time.advance();
        }
        assert_eq!(time.tick, FRAME_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_solver_inputs_defaults_fill_missing_fields() {
        let inputs: SolverInputs = serde_json::from_str(r#"{"wind_speed_mps": 4.0}"#).unwrap();
        assert_eq!(inputs.wind_speed_mps, 4.0);
        assert_eq!(inputs.ammo, AmmoType::Apfsds);
        assert_eq!(inputs.temperature_c, DEFAULT_TEMPERATURE_C);
    }

    /// Commands travel as internally tagged JSON from the input layer.
    #[test]
    fn test_operator_command_wire_format() {
        let json = serde_json::to_string(&OperatorCommand::SelectAt {
            x_px: 12.0,
            y_px: -4.5,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"SelectAt","x_px":12.0,"y_px":-4.5}"#);

        let cmd: OperatorCommand =
            serde_json::from_str(r#"{"type":"SetAmmo","ammo":"Heat"}"#).unwrap();
        assert!(matches!(
            cmd,
            OperatorCommand::SetAmmo {
                ammo: AmmoType::Heat
            }
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FcsError::NoTargetSelected.to_string(), "No target selected");
        assert_eq!(FcsError::NotLocked.to_string(), "No locked target");
        assert_eq!(
            FcsError::InvalidParameter("wind speed".into()).to_string(),
            "Invalid parameter: wind speed"
        );
    }
}
