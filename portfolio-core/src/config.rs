use std::str::FromStr;

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const BUNDLED_SITE_CONFIG: &str = include_str!("../../content/site.json");

/// Pixel offsets that drive the scroll-derived flags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// Header switches to its solid style past this offset.
    pub header: f64,
    /// Scroll-to-top button shows past this offset.
    pub scroll_top: f64,
    /// Distance of the active-section probe line from the viewport top.
    pub probe_line: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        ScrollThresholds {
            header: 50.0,
            scroll_top: 300.0,
            probe_line: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Minimum visible fraction of an element's area.
    pub threshold: f64,
    /// Inset applied to every side of the viewport (px).
    pub margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            margin: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLimits {
    pub education: usize,
    pub project: usize,
}

impl Default for CardLimits {
    fn default() -> Self {
        CardLimits {
            education: 120,
            project: 140,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub hero_particles: usize,
    pub hero_radius: [f32; 2],
    pub timeline_particles: usize,
    /// Fixed seed for reproducible backgrounds; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            hero_particles: 5000,
            hero_radius: [1.0, 3.0],
            timeline_particles: 100,
            seed: None,
        }
    }
}

/// EmailJS account identifiers plus the fixed recipient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            to_email: "youngkillian0308@gmail.com".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub path: String,
    pub filename: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        ResumeConfig {
            path: "resume.pdf".to_string(),
            filename: "Developer_Resume.pdf".to_string(),
        }
    }
}

impl ResumeConfig {
    /// The named copy offered by the hero call to action.
    pub fn hero() -> Self {
        ResumeConfig {
            path: "Resume-of-Byron-Young.pdf".to_string(),
            filename: "Resume-of-Byron-Young.pdf".to_string(),
        }
    }
}

/// Everything the page reads at start-up. Missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollThresholds,
    pub reveal: RevealConfig,
    pub cards: CardLimits,
    pub scene: SceneConfig,
    pub email: EmailConfig,
    /// Download behind the nav "Resume" buttons.
    pub resume: ResumeConfig,
    /// Download behind the hero "Download Resume" button.
    pub hero_resume: ResumeConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            scroll: ScrollThresholds::default(),
            reveal: RevealConfig::default(),
            cards: CardLimits::default(),
            scene: SceneConfig::default(),
            email: EmailConfig::default(),
            resume: ResumeConfig::default(),
            hero_resume: ResumeConfig::hero(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Config shipped inside the binary. Falls back to defaults if it is broken.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_SITE_CONFIG) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("bundled site config rejected, using defaults: {e}");
                SiteConfig::default()
            }
        }
    }

    /// Download for a trigger's `data-resume` value. Only `hero` picks the
    /// hero copy.
    pub fn resume_for(&self, trigger: &str) -> &ResumeConfig {
        match trigger {
            "hero" => &self.hero_resume,
            _ => &self.resume,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scroll;
        if s.header < 0.0 || s.scroll_top < 0.0 || s.probe_line < 0.0 {
            return Err(ConfigError::Invalid(
                "scroll thresholds must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal threshold {} is outside 0..=1",
                self.reveal.threshold
            )));
        }
        if self.cards.education == 0 || self.cards.project == 0 {
            return Err(ConfigError::Invalid("card limits must be positive".into()));
        }
        let [r_min, r_max] = self.scene.hero_radius;
        if !(r_min >= 0.0 && r_min <= r_max) {
            return Err(ConfigError::Invalid(format!(
                "hero radius range [{r_min}, {r_max}] is empty"
            )));
        }
        if LevelFilter::from_str(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let cfg = SiteConfig::from_json(BUNDLED_SITE_CONFIG).unwrap();
        assert_eq!(cfg.scroll, ScrollThresholds::default());
        assert_eq!(cfg.cards.project, 140);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{"scroll":{"header":80}}"#).unwrap();
        assert_eq!(cfg.scroll.header, 80.0);
        assert_eq!(cfg.scroll.scroll_top, 300.0);
        assert_eq!(cfg.reveal, RevealConfig::default());
        assert_eq!(cfg.log_level(), LevelFilter::Info);
    }

    #[test]
    fn resume_triggers_pick_their_download() {
        let cfg = SiteConfig::bundled();
        assert_eq!(cfg.resume_for("nav").path, "resume.pdf");
        assert_eq!(cfg.resume_for("").filename, "Developer_Resume.pdf");
        assert_eq!(
            cfg.resume_for("hero").filename,
            "Resume-of-Byron-Young.pdf"
        );

        let cfg = SiteConfig::from_json(r#"{"resume":{"path":"cv.pdf"}}"#).unwrap();
        assert_eq!(cfg.resume_for("nav").path, "cv.pdf");
        assert_eq!(cfg.resume_for("nav").filename, "Developer_Resume.pdf");
        assert_eq!(cfg.resume_for("hero"), &ResumeConfig::hero());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SiteConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"scene":{"hero_radius":[3.0,1.0]}}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }
}
