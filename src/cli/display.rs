//! Display utilities for the focus-session timer CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display with phase, progress and cadence preview

use crate::types::{IpcResponse, TimerSnapshot};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the result of a toggle command.
    pub fn show_toggle(response: &IpcResponse) {
        if let Some(data) = &response.data {
            let marker = if data.is_active { ">" } else { "||" };
            println!("{} {}", marker, response.message);
            let (minutes, seconds) = Self::format_time(data.remaining_seconds);
            println!("  残り時間: {}:{:02}", minutes, seconds);
        } else {
            println!("{}", response.message);
        }
    }

    /// Shows the result of a reset command.
    pub fn show_reset(response: &IpcResponse) {
        println!("[] {}", response.message);

        if let Some(data) = &response.data {
            let (minutes, seconds) = Self::format_time(data.remaining_seconds);
            println!("  残り時間: {}:{:02}", minutes, seconds);
        }
    }

    /// Shows the result of a config command.
    pub fn show_config(response: &IpcResponse) {
        println!("* {}", response.message);

        if let Some(data) = &response.data {
            println!("  集中: {}分", data.focus_minutes);
            println!("  短い休憩: {}分", data.short_break_minutes);
            println!("  長い休憩: {}分", data.long_break_minutes);
        }
    }

    /// Shows the result of a sound or test-sound command.
    pub fn show_sound(response: &IpcResponse) {
        println!("* {}", response.message);
    }

    /// Shows the current timer status.
    pub fn show_status(response: &IpcResponse) {
        println!("フォーカスタイマー ステータス");
        println!("─────────────────────────────");

        if let Some(data) = &response.data {
            println!("状態: {}", Self::phase_label(data));

            let (minutes, seconds) = Self::format_time(data.remaining_seconds);
            println!("残り時間: {}:{:02}", minutes, seconds);
            println!("進捗: {}%", Self::progress_percent(data));
            println!("完了セッション: {}", data.sessions_completed);

            if !data.is_break {
                println!(
                    "次の長い休憩まで: {}セッション",
                    data.sessions_until_long_break()
                );
            }

            let sound = if data.sound_enabled { "オン" } else { "オフ" };
            println!("サウンド: {}", sound);
        } else {
            println!("タイマーは起動していません");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Returns the Japanese label for the snapshot's phase and running flag.
    fn phase_label(data: &TimerSnapshot) -> &'static str {
        match (data.is_break, data.is_long_break(), data.is_active) {
            (false, _, true) => "集中中",
            (false, _, false) => "集中 (一時停止中)",
            (true, false, true) => "休憩中",
            (true, false, false) => "休憩 (一時停止中)",
            (true, true, true) => "長い休憩中",
            (true, true, false) => "長い休憩 (一時停止中)",
        }
    }

    /// Percentage of the current phase elapsed, rounded down.
    fn progress_percent(data: &TimerSnapshot) -> u32 {
        let full_minutes = if data.is_break {
            if data.is_long_break() {
                data.long_break_minutes
            } else {
                data.short_break_minutes
            }
        } else {
            data.focus_minutes
        };
        let full = full_minutes * 60;

        if full == 0 || data.remaining_seconds >= full {
            return 0;
        }
        (full - data.remaining_seconds) * 100 / full
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
