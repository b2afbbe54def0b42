use serde::Serialize;

pub const PARTICLES_ID: &str = "particles-js";

/// Parameters handed to particles.js, which owns its own render loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticlesConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particles {
    pub color: Value<String>,
    pub line_linked: LineLinked,
    pub number: Value<u32>,
    pub size: Value<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLinked {
    pub color: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value<T> {
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interactivity {
    pub events: Events,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Events {
    pub onhover: Trigger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    pub enable: bool,
    pub mode: HoverMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    Grab,
    Bubble,
    Repulse,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        let black = || Value {
            value: "#000000".to_string(),
        };
        ParticlesConfig {
            particles: Particles {
                color: black(),
                line_linked: LineLinked { color: black() },
                number: Value { value: 50 },
                size: Value { value: 3 },
            },
            interactivity: Interactivity {
                events: Events {
                    onhover: Trigger {
                        enable: true,
                        mode: HoverMode::Repulse,
                    },
                },
            },
        }
    }
}

impl ParticlesConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_params() {
        let value = serde_json::to_value(ParticlesConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "particles": {
                    "color": { "value": "#000000" },
                    "line_linked": { "color": { "value": "#000000" } },
                    "number": { "value": 50 },
                    "size": { "value": 3 }
                },
                "interactivity": {
                    "events": {
                        "onhover": { "enable": true, "mode": "repulse" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_hover_mode_names() {
        let mut config = ParticlesConfig::default();
        config.interactivity.events.onhover.mode = HoverMode::Grab;
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""mode":"grab""#));
    }
}
