// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use core::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::SeqCst;

use lazy_static::lazy_static;
use yansi::{Color, Style};

static ASCII_MODE: AtomicBool = AtomicBool::new(false);

/// Must be called before any prefix is used for the first time
pub fn ascii_mode() {
    ASCII_MODE.store(true, SeqCst);
}

pub fn no_color_mode() {
    yansi::disable();
}

pub static ATTENTION: Style = Style::new().fg(Color::Yellow).bold();
pub static BANNER: Style = Style::new().fg(Color::Cyan);
pub static DIM: Style = Style::new().dim();
pub static EMPH: Style = Style::new().fg(Color::White).bold();
pub static ERROR: Style = Style::new().fg(Color::Red).bold();
pub static OK: Style = Style::new().fg(Color::Green).bold();

lazy_static! {
    pub static ref ATTENTION_PREFIX: String = (if ASCII_MODE.load(SeqCst) { "!" } else { "⚠︎" }).to_string();
    pub static ref CAPTION_PREFIX: String = (if ASCII_MODE.load(SeqCst) { ">" } else { "▶︎" }).to_string();
    pub static ref ERROR_PREFIX: String = (if ASCII_MODE.load(SeqCst) { "!" } else { "✗" }).to_string();
    pub static ref INFO_PREFIX: String = (if ASCII_MODE.load(SeqCst) { "-" } else { "▸" }).to_string();
    pub static ref OK_PREFIX: String = (if ASCII_MODE.load(SeqCst) { "=" } else { "✓" }).to_string();
}
