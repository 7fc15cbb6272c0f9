//! Simulation configuration

use serde::{Deserialize, Serialize};

/// Configuration for a batch shot simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of shots to play
    pub shots: u32,
    /// RNG seed for shot sampling and hole relocation (None = random)
    pub seed: Option<u64>,
    /// Fixed step rate
    pub fps: f32,
    /// Max aim error either side of the hole, in degrees
    pub aim_spread_deg: f32,
    /// Give up on a shot that is still moving after this long (seconds)
    pub shot_timeout: f32,
    /// Tuning file to load instead of the global one
    pub tuning_file: Option<String>,
    /// Output file path for JSON metrics (None = stdout summary only)
    pub output_file: Option<String>,
    /// Suppress per-shot output
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shots: 100,
            seed: None,
            fps: 60.0,
            aim_spread_deg: 10.0,
            shot_timeout: 60.0,
            tuning_file: None,
            output_file: None,
            quiet: false,
        }
    }
}

impl SimConfig {
    /// Parse command-line arguments
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_args(&args[1..])
    }

    pub fn parse_args(args: &[String]) -> Self {
        let mut config = Self::default();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--shots" => {
                    if let Some(v) = value {
                        config.shots = v.parse().unwrap_or(config.shots);
                        i += 1;
                    }
                }
                "--seed" => {
                    if let Some(v) = value {
                        config.seed = v.parse().ok();
                        i += 1;
                    }
                }
                "--fps" => {
                    if let Some(v) = value {
                        match v.parse::<f32>() {
                            Ok(fps) if fps.is_finite() && fps > 0.0 => config.fps = fps,
                            _ => eprintln!("Warning: --fps must be positive, got {}", v),
                        }
                        i += 1;
                    }
                }
                "--spread" => {
                    if let Some(v) = value {
                        config.aim_spread_deg = v.parse().unwrap_or(config.aim_spread_deg);
                        i += 1;
                    }
                }
                "--tuning" => {
                    if let Some(v) = value {
                        config.tuning_file = Some(v.clone());
                        i += 1;
                    }
                }
                "--output" | "-o" => {
                    if let Some(v) = value {
                        config.output_file = Some(v.clone());
                        i += 1;
                    }
                }
                "--quiet" | "-q" => config.quiet = true,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => eprintln!("Warning: unknown argument {}", other),
            }
            i += 1;
        }

        config
    }

    /// Reject settings the simulator cannot step with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(format!("fps must be positive, got {}", self.fps));
        }
        if self.shot_timeout < 0.0 {
            return Err(format!(
                "shot_timeout must not be negative, got {}",
                self.shot_timeout
            ));
        }
        Ok(())
    }
}

fn print_help() {
    println!(
        r#"Mini golf shot simulation

Plays random shots against the hole headlessly and reports capture rate.

USAGE:
    cargo run --bin simulate -- [OPTIONS]

OPTIONS:
    --shots <N>        Number of shots (default: 100)
    --seed <N>         RNG seed for reproducible runs
    --fps <HZ>         Fixed step rate (default: 60)
    --spread <DEG>     Aim error either side of the hole (default: 10)
    --tuning <PATH>    Tuning JSON to use instead of config/golf_tuning.json
    -o, --output <P>   Write metrics JSON to a file
    -q, --quiet        Only print the summary
    -h, --help         Show this help
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let config = SimConfig::parse_args(&args(&["--shots", "25", "--seed", "9", "-q"]));
        assert_eq!(config.shots, 25);
        assert_eq!(config.seed, Some(9));
        assert!(config.quiet);
        assert_eq!(config.fps, 60.0);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = SimConfig::parse_args(&args(&["--shots", "lots", "--fps"]));
        assert_eq!(config.shots, 100);
        assert_eq!(config.fps, 60.0);
    }

    #[test]
    fn test_non_positive_fps_keeps_default() {
        for bad in ["0", "-30", "NaN", "inf"] {
            let config = SimConfig::parse_args(&args(&["--fps", bad]));
            assert_eq!(config.fps, 60.0, "--fps {}", bad);
        }
        let config = SimConfig::parse_args(&args(&["--fps", "144"]));
        assert_eq!(config.fps, 144.0);
    }

    #[test]
    fn test_validate_rejects_zero_fps() {
        let config = SimConfig {
            fps: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}
