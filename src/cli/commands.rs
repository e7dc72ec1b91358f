//! Command definitions for the focus-session timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::CueKind;

// ============================================================================
// CLI Structure
// ============================================================================

/// Focus-session timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "focus-timer",
    version,
    about = "集中セッションタイマーCLI",
    long_about = "ターミナル上で動作する集中セッションタイマー。\n\
                  集中と休憩を交互に繰り返し、4セッションごとに長い休憩を取ります。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start or pause the timer
    Toggle,

    /// Rewind the current phase to its full duration
    Reset,

    /// Show current timer status
    Status,

    /// Set custom phase durations
    Config(ConfigArgs),

    /// Toggle notification sounds on or off
    Sound,

    /// Play one notification cue for auditioning
    TestSound {
        /// Which cue to play
        #[arg(value_enum, default_value_t = CueArg::FocusComplete)]
        cue: CueArg,
    },

    /// Run as daemon (background service)
    #[command(hide = true)]
    Daemon,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Config Command Arguments
// ============================================================================

/// Arguments for the config command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Focus duration in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub focus: u32,

    /// Short break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub long_break: u32,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            focus: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

// ============================================================================
// Cue Argument
// ============================================================================

/// Cue names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CueArg {
    /// Regular focus completion cue
    FocusComplete,
    /// Break completion cue
    BreakComplete,
    /// Long-break milestone cue
    Milestone,
}

impl From<CueArg> for CueKind {
    fn from(arg: CueArg) -> Self {
        match arg {
            CueArg::FocusComplete => CueKind::FocusComplete,
            CueArg::BreakComplete => CueKind::BreakComplete,
            CueArg::Milestone => CueKind::Milestone,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Cli Tests
    // ------------------------------------------------------------------------

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["focus-timer"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["focus-timer", "--verbose"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_short_verbose_flag() {
            let cli = Cli::parse_from(["focus-timer", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_toggle_command() {
            let cli = Cli::parse_from(["focus-timer", "toggle"]);
            assert!(matches!(cli.command, Some(Commands::Toggle)));
        }

        #[test]
        fn test_parse_reset_command() {
            let cli = Cli::parse_from(["focus-timer", "reset"]);
            assert!(matches!(cli.command, Some(Commands::Reset)));
        }

        #[test]
        fn test_parse_status_command() {
            let cli = Cli::parse_from(["focus-timer", "status"]);
            assert!(matches!(cli.command, Some(Commands::Status)));
        }

        #[test]
        fn test_parse_sound_command() {
            let cli = Cli::parse_from(["focus-timer", "sound"]);
            assert!(matches!(cli.command, Some(Commands::Sound)));
        }

        #[test]
        fn test_parse_daemon_command() {
            let cli = Cli::parse_from(["focus-timer", "daemon"]);
            assert!(matches!(cli.command, Some(Commands::Daemon)));
        }

        #[test]
        fn test_parse_completions_bash() {
            let cli = Cli::parse_from(["focus-timer", "completions", "bash"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Bash);
                }
                _ => panic!("Expected Completions command"),
            }
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["focus-timer", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Config Command Tests
    // ------------------------------------------------------------------------

    mod config_args_tests {
        use super::*;

        #[test]
        fn test_parse_config_defaults() {
            let cli = Cli::parse_from(["focus-timer", "config"]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 25);
                    assert_eq!(args.short_break, 5);
                    assert_eq!(args.long_break, 15);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_parse_config_focus() {
            let cli = Cli::parse_from(["focus-timer", "config", "--focus", "50"]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 50);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_parse_config_short_flags() {
            let cli = Cli::parse_from(["focus-timer", "config", "-f", "45", "-s", "10", "-l", "30"]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 45);
                    assert_eq!(args.short_break, 10);
                    assert_eq!(args.long_break, 30);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_parse_config_all_options() {
            let cli = Cli::parse_from([
                "focus-timer",
                "config",
                "--focus",
                "50",
                "--short-break",
                "10",
                "--long-break",
                "30",
            ]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 50);
                    assert_eq!(args.short_break, 10);
                    assert_eq!(args.long_break, 30);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_parse_config_boundary_focus_min() {
            let cli = Cli::parse_from(["focus-timer", "config", "--focus", "1"]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 1);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_parse_config_boundary_focus_max() {
            let cli = Cli::parse_from(["focus-timer", "config", "--focus", "120"]);
            match cli.command {
                Some(Commands::Config(args)) => {
                    assert_eq!(args.focus, 120);
                }
                _ => panic!("Expected Config command"),
            }
        }

        #[test]
        fn test_config_args_default() {
            let args = ConfigArgs::default();
            assert_eq!(args.focus, 25);
            assert_eq!(args.short_break, 5);
            assert_eq!(args.long_break, 15);
        }
    }

    // ------------------------------------------------------------------------
    // Test Sound Command Tests
    // ------------------------------------------------------------------------

    mod test_sound_tests {
        use super::*;

        #[test]
        fn test_parse_test_sound_default_cue() {
            let cli = Cli::parse_from(["focus-timer", "test-sound"]);
            match cli.command {
                Some(Commands::TestSound { cue }) => {
                    assert_eq!(cue, CueArg::FocusComplete);
                }
                _ => panic!("Expected TestSound command"),
            }
        }

        #[test]
        fn test_parse_test_sound_milestone() {
            let cli = Cli::parse_from(["focus-timer", "test-sound", "milestone"]);
            match cli.command {
                Some(Commands::TestSound { cue }) => {
                    assert_eq!(cue, CueArg::Milestone);
                }
                _ => panic!("Expected TestSound command"),
            }
        }

        #[test]
        fn test_parse_test_sound_break_complete() {
            let cli = Cli::parse_from(["focus-timer", "test-sound", "break-complete"]);
            match cli.command {
                Some(Commands::TestSound { cue }) => {
                    assert_eq!(cue, CueArg::BreakComplete);
                }
                _ => panic!("Expected TestSound command"),
            }
        }

        #[test]
        fn test_cue_arg_conversion() {
            assert_eq!(CueKind::from(CueArg::FocusComplete), CueKind::FocusComplete);
            assert_eq!(CueKind::from(CueArg::BreakComplete), CueKind::BreakComplete);
            assert_eq!(CueKind::from(CueArg::Milestone), CueKind::Milestone);
        }
    }

    // ------------------------------------------------------------------------
    // Error Case Tests (using try_parse)
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_parse_config_focus_too_low() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--focus", "0"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_config_focus_too_high() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--focus", "121"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_config_short_break_too_low() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--short-break", "0"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_config_long_break_too_high() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--long-break", "61"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_config_focus_not_number() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--focus", "abc"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_config_focus_negative() {
            let result = Cli::try_parse_from(["focus-timer", "config", "--focus", "-5"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_test_sound_invalid_cue() {
            let result = Cli::try_parse_from(["focus-timer", "test-sound", "gong"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_unknown_command() {
            let result = Cli::try_parse_from(["focus-timer", "unknown"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_completions_invalid_shell() {
            let result = Cli::try_parse_from(["focus-timer", "completions", "invalid"]);
            assert!(result.is_err());
        }
    }
}
