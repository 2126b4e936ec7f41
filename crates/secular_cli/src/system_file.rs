//! TOML description of a two-planet system, plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use secular_core::TwoBodySystem;

/// Flags that replace individual fields of the loaded (or preset) system.
#[derive(Debug, Clone, Default, Args)]
pub struct SystemOverrides {
    /// Inner planet semi-major axis in AU
    #[arg(long)]
    pub inner_a: Option<f64>,
    /// Inner planet mass in solar masses
    #[arg(long)]
    pub inner_mass: Option<f64>,
    /// Outer planet semi-major axis in AU
    #[arg(long)]
    pub outer_a: Option<f64>,
    /// Outer planet mass in solar masses
    #[arg(long)]
    pub outer_mass: Option<f64>,
    /// Central star mass in solar masses
    #[arg(long)]
    pub central_mass: Option<f64>,
    /// Gravitational constant in AU^3 / (Msun yr^2)
    #[arg(long)]
    pub gravitational_parameter: Option<f64>,
}

impl SystemOverrides {
    pub fn apply(&self, mut system: TwoBodySystem) -> TwoBodySystem {
        if let Some(v) = self.inner_a {
            system.inner.semi_major_axis_au = v;
        }
        if let Some(v) = self.inner_mass {
            system.inner.mass_msun = v;
        }
        if let Some(v) = self.outer_a {
            system.outer.semi_major_axis_au = v;
        }
        if let Some(v) = self.outer_mass {
            system.outer.mass_msun = v;
        }
        if let Some(v) = self.central_mass {
            system.central_mass_msun = v;
        }
        if let Some(v) = self.gravitational_parameter {
            system.gravitational_parameter = v;
        }
        system
    }
}

/// Parse and validate a system description.
pub fn parse_system(text: &str) -> Result<TwoBodySystem> {
    let system: TwoBodySystem = toml::from_str(text)?;
    system.validate()?;
    Ok(system)
}

/// Read a system file from disk.
pub fn load_system(path: &Path) -> Result<TwoBodySystem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read system file {}", path.display()))?;
    let system =
        parse_system(&text).with_context(|| format!("invalid system file {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        inner = %system.inner.name,
        outer = %system.outer.name,
        "loaded system"
    );
    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secular_core::{G_AU3_PER_MSUN_YR2, SecularError};

    const PRESET: &str = include_str!("../../../systems/jupiter_saturn.toml");

    #[test]
    fn preset_file_matches_builtin() {
        assert_eq!(parse_system(PRESET).unwrap(), TwoBodySystem::jupiter_saturn());
    }

    #[test]
    fn defaults_for_star() {
        let sys = parse_system(
            r#"
            [inner]
            semi_major_axis_au = 1.0
            mass_msun = 3e-6
            [outer]
            semi_major_axis_au = 1.52
            mass_msun = 3.2e-7
            "#,
        )
        .unwrap();
        assert_eq!(sys.central_mass_msun, 1.0);
        assert_eq!(sys.gravitational_parameter, G_AU3_PER_MSUN_YR2);
        assert!(sys.inner.name.is_empty());
    }

    #[test]
    fn missing_body_is_parse_error() {
        let err = parse_system("[inner]\nsemi_major_axis_au = 1.0\nmass_msun = 1e-3\n");
        assert!(err.is_err());
    }

    #[test]
    fn invalid_mass_is_reported() {
        let err = parse_system(
            r#"
            [inner]
            name = "x"
            semi_major_axis_au = 1.0
            mass_msun = -1.0
            [outer]
            semi_major_axis_au = 2.0
            mass_msun = 1e-3
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SecularError>(),
            Some(SecularError::InvalidBody { .. })
        ));
    }

    #[test]
    fn overrides_replace_fields() {
        let o = SystemOverrides {
            outer_a: Some(10.0),
            central_mass: Some(1.1),
            ..Default::default()
        };
        let sys = o.apply(TwoBodySystem::jupiter_saturn());
        assert_eq!(sys.outer.semi_major_axis_au, 10.0);
        assert_eq!(sys.central_mass_msun, 1.1);
        assert_eq!(sys.inner.semi_major_axis_au, 5.202);
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_system(Path::new("/nonexistent/system.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read system file"));
    }
}
