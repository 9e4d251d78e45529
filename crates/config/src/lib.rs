// Pure data crate: animation configuration (no Bevy dependency).
// Provides: data structures, layered loading, validation producing warnings (non-fatal), and tests.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 360.0,
            title: "Status Balls".into(),
            auto_close: 0.0,
        }
    }
}

/// Simulation surface sizing. The field is the canvas-like sub-region the
/// balls live in: width follows the window up to `max_width` (minus a margin),
/// height is fixed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub max_width: f32,
    pub height: f32,
    pub margin: f32,
}
impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_width: 600.0,
            height: 200.0,
            margin: 40.0,
        }
    }
}

impl FieldConfig {
    /// Field width for a given window width (cap minus margin, never below 1).
    pub fn width_for_window(&self, window_width: f32) -> f32 {
        self.max_width.min(window_width - self.margin).max(1.0)
    }
}

/// Digit layout tuning. Cell size and spacing are in field pixels; radii scale
/// down linearly below `full_scale_width` to a floor of `min_radius`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub cell_size: f32,
    pub digit_spacing: f32,
    pub base_radius: f32,
    pub min_radius: f32,
    pub full_scale_width: f32,
}
impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 12.0,
            digit_spacing: 15.0,
            base_radius: 8.0,
            min_radius: 4.0,
            full_scale_width: 400.0,
        }
    }
}

/// Force tuning for the stepper. The per-millisecond coefficients multiply the
/// frame's elapsed milliseconds; `collision_damper` is the fraction of speed
/// lost on a wall bounce and `wall_inset` the clamp offset inside the wall.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub restore_force: f32,
    pub floor_friction: f32,
    pub mouse_force: f32,
    pub collision_damper: f32,
    pub wall_inset: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            restore_force: 0.002,
            floor_friction: 0.0005,
            mouse_force: 1.0,
            collision_damper: 0.3,
            wall_inset: 2.0,
        }
    }
}

/// Animation palette as hex strings so the config stays engine-agnostic.
/// Unparseable or missing entries fall back per-slot at parse time (rendering
/// crate owns the conversion).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}
impl PaletteConfig {
    /// Number of palette slots the animation cycles through.
    pub const SIZE: usize = 5;
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "#3b82f6".into(),
                "#f59e0b".into(),
                "#10b981".into(),
                "#ec4899".into(),
                "#8b5cf6".into(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub layout: LayoutConfig,
    pub physics: PhysicsConfig,
    pub palette: PaletteConfig,
    /// Status code displayed at startup (CLI `--code` overrides).
    pub status_code: u32,
}
impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            field: Default::default(),
            layout: Default::default(),
            physics: Default::default(),
            palette: Default::default(),
            status_code: 404,
        }
    }
}

fn looks_like_hex_color(s: &str) -> bool {
    let t = s.strip_prefix('#').unwrap_or(s);
    (t.len() == 6 || t.len() == 8) && t.chars().all(|c| c.is_ascii_hexdigit())
}

impl AnimConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips missing files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.clone().into_rust::<AnimConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (AnimConfig::default(), used, evec)
                }
            }
        } else {
            (AnimConfig::default(), used, errors)
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.field.max_width <= 0.0 || self.field.height <= 0.0 {
            w.push("field dimensions must be > 0".into());
        }
        if self.field.margin < 0.0 {
            w.push("field.margin negative".into());
        }
        if self.field.margin >= self.window.width {
            w.push(format!(
                "field.margin {} consumes the whole window width {}",
                self.field.margin, self.window.width
            ));
        }
        if self.layout.cell_size <= 0.0 {
            w.push("layout.cell_size must be > 0".into());
        }
        if self.layout.digit_spacing < 0.0 {
            w.push("layout.digit_spacing negative -> digits overlap".into());
        }
        if self.layout.base_radius <= 0.0 {
            w.push("layout.base_radius must be > 0".into());
        }
        if self.layout.min_radius > self.layout.base_radius {
            w.push(format!(
                "layout.min_radius {} exceeds base_radius {}",
                self.layout.min_radius, self.layout.base_radius
            ));
        }
        if self.layout.full_scale_width <= 0.0 {
            w.push("layout.full_scale_width must be > 0".into());
        }
        if self.layout.base_radius * 2.0 > self.layout.cell_size {
            w.push(format!(
                "layout.base_radius {} large for cell_size {}; adjacent balls overlap at full scale",
                self.layout.base_radius, self.layout.cell_size
            ));
        }
        if !(0.0..=1.0).contains(&self.physics.collision_damper) {
            w.push(format!(
                "physics.collision_damper {} outside 0..1",
                self.physics.collision_damper
            ));
        }
        if self.physics.restore_force < 0.0 {
            w.push("physics.restore_force negative -> balls repelled from home".into());
        }
        if self.physics.floor_friction < 0.0 {
            w.push("physics.floor_friction negative -> velocities grow unbounded".into());
        }
        if self.physics.mouse_force < 0.0 {
            w.push("physics.mouse_force negative -> cursor attracts instead of repelling".into());
        }
        if self.physics.wall_inset < 0.0 {
            w.push("physics.wall_inset negative".into());
        }
        if self.palette.colors.is_empty() {
            w.push("palette.colors empty; defaults will be used".into());
        } else if self.palette.colors.len() != PaletteConfig::SIZE {
            w.push(format!(
                "palette.colors has {} entries; expected {} (missing slots fall back, extras are ignored)",
                self.palette.colors.len(),
                PaletteConfig::SIZE
            ));
        }
        for (i, c) in self.palette.colors.iter().enumerate() {
            if !looks_like_hex_color(c) {
                w.push(format!(
                    "palette.colors[{i}] {c:?} not a hex color; slot falls back to default"
                ));
            }
        }
        let digits = self.status_code.to_string().len();
        if digits > 5 {
            w.push(format!(
                "status_code {} has {digits} digits; layout will overflow narrow fields",
                self.status_code
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r##"(
            window: (width: 800.0, height: 400.0, title: "Test"),
            field: (max_width: 500.0, height: 180.0, margin: 20.0),
            layout: (
                cell_size: 12.0,
                digit_spacing: 15.0,
                base_radius: 6.0,
                min_radius: 4.0,
                full_scale_width: 400.0,
            ),
            physics: (
                restore_force: 0.002,
                floor_friction: 0.0005,
                mouse_force: 1.0,
                collision_damper: 0.3,
                wall_inset: 2.0,
            ),
            palette: (colors: ["#112233", "#445566", "#778899", "#aabbcc", "#ddeeff"]),
            status_code: 503,
        )"##;
        let cfg = AnimConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.field.max_width, 500.0);
        assert_eq!(cfg.status_code, 503);
        assert_eq!(cfg.palette.colors.len(), 5);
        assert!(cfg.validate().is_empty(), "expected no warnings");
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = AnimConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -1.0,
            },
            field: FieldConfig {
                max_width: 0.0,
                height: -5.0,
                margin: -1.0,
            },
            layout: LayoutConfig {
                cell_size: 0.0,
                digit_spacing: -2.0,
                base_radius: 0.0,
                min_radius: 4.0,
                full_scale_width: 0.0,
            },
            physics: PhysicsConfig {
                restore_force: -0.1,
                floor_friction: -0.1,
                mouse_force: -1.0,
                collision_damper: 1.5,
                wall_inset: -2.0,
            },
            palette: PaletteConfig {
                colors: vec!["nope".into(), "#123".into()],
            },
            status_code: 1234567,
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("field dimensions must be > 0"));
        assert!(joined.contains("layout.cell_size must be > 0"));
        assert!(joined.contains("layout.min_radius"));
        assert!(joined.contains("collision_damper"));
        assert!(joined.contains("restore_force negative"));
        assert!(joined.contains("palette.colors[0]"));
        assert!(joined.contains("palette.colors[1]"));
        assert!(joined.contains("status_code"));
        assert!(
            warnings.len() >= 12,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = AnimConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
        assert_eq!(cfg.status_code, 404);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            field: (max_width: 550.0),
            status_code: 500,
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            status_code: 418,
        )"#;
        let (cfg, used, errors) = AnimConfig::load_layered([
            write_temp(base).path().to_path_buf(),
            write_temp(override_one).path().to_path_buf(),
        ]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0);
        assert_eq!(cfg.window.title, "Custom Title");
        assert_eq!(cfg.field.max_width, 550.0);
        assert_eq!(cfg.status_code, 418);
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn parse_autoclose_and_validate() {
        let sample = r"(window: (autoClose: 3.25))";
        let cfg = AnimConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);

        let neg_sample = r"(window: (autoClose: -5.0))";
        let cfg2 = AnimConfig::load_from_file(write_temp(neg_sample).path()).expect("parse config");
        assert!(
            cfg2.validate().iter().any(|w| w.contains("window.autoClose")),
            "expected warning for negative autoClose"
        );
    }

    #[test]
    fn field_width_follows_window_up_to_cap() {
        let field = FieldConfig::default();
        assert_eq!(field.width_for_window(1280.0), 600.0);
        assert_eq!(field.width_for_window(440.0), 400.0);
        assert_eq!(field.width_for_window(10.0), 1.0);
    }

    // Helper: create a temp file with given contents; returns handle (kept for lifetime)
    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        f.write_all(contents.as_bytes()).unwrap();
        f
    }
}
