//! DSP-4xx protocol definitions and encoding.
//!
//! Protocol structure:
//! - Mode select: `7E mode 7E`
//! - Commands: `04 01 <cmd> <args...> 17`
//! - Text: raw bytes written at the cursor, no framing
//!
//! Positions are absolute, 1-based across all lines, and sent as a single
//! byte offset by ASCII `'0'`.

/// Frame prefix for commands.
pub const COMMAND_PREFIX: [u8; 2] = [0x04, 0x01];

/// Frame terminator for commands.
pub const COMMAND_SUFFIX: u8 = 0x17;

/// Offset added to a position to form its wire byte.
pub const POSITION_OFFSET: usize = 48;

/// Byte sent in place of a position the firmware cannot address.
pub const POSITION_SENTINEL: u8 = 0x00;

/// Byte sent in place of characters outside Latin-1.
pub const REPLACEMENT_CHAR: u8 = b'?';

/// Firmware command opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Change the serial line speed.
    SetBaudRate = 0x42,
    /// Clear a range of positions.
    Clear = 0x43,
    /// Run the stored demo message.
    ShowDemo = 0x44,
    /// Move the cursor.
    SetCursor = 0x50,
    /// Store the demo message.
    SaveDemo = 0x53,
    /// Read back the screen contents.
    GetScreen = 0x54,
    /// Select the command dialect. Also used as the frame delimiter.
    SetMode = 0x7E,
}

/// Command dialects the firmware can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Native DSP-T command set.
    #[default]
    DspT = 0x00,
    /// Epson ESC/POS compatible.
    EpsonEscPos = 0x01,
    /// UTC standard.
    UtcStandard = 0x02,
    /// UTC enhanced.
    UtcEnhanced = 0x03,
    /// AEDEX.
    Aedex = 0x04,
    /// ICD-2002.
    Icd2002 = 0x05,
    /// CD-5220.
    Cd5220 = 0x06,
    /// DSP-800.
    Dsp800 = 0x07,
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "dsp-t" | "dsp_t" => Ok(Mode::DspT),
            "esc-pos" | "esc_pos" | "epson" => Ok(Mode::EpsonEscPos),
            "utc-standard" | "utc_standard" => Ok(Mode::UtcStandard),
            "utc-enhanced" | "utc_enhanced" => Ok(Mode::UtcEnhanced),
            "aedex" => Ok(Mode::Aedex),
            "icd-2002" | "icd_2002" => Ok(Mode::Icd2002),
            "cd-5220" | "cd_5220" => Ok(Mode::Cd5220),
            "dsp-800" | "dsp_800" => Ok(Mode::Dsp800),
            _ => Err(crate::Error::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::DspT => write!(f, "dsp-t"),
            Mode::EpsonEscPos => write!(f, "esc-pos"),
            Mode::UtcStandard => write!(f, "utc-standard"),
            Mode::UtcEnhanced => write!(f, "utc-enhanced"),
            Mode::Aedex => write!(f, "aedex"),
            Mode::Icd2002 => write!(f, "icd-2002"),
            Mode::Cd5220 => write!(f, "cd-5220"),
            Mode::Dsp800 => write!(f, "dsp-800"),
        }
    }
}

/// Encodes an absolute position as its wire byte.
///
/// Positions above `max_position`, or whose code would not fit in a byte,
/// become [`POSITION_SENTINEL`] instead of an error.
pub fn encode_position(position: usize, max_position: usize) -> u8 {
    if position > max_position {
        return POSITION_SENTINEL;
    }
    u8::try_from(position + POSITION_OFFSET).unwrap_or(POSITION_SENTINEL)
}

/// Builds a mode select packet.
pub fn build_mode_packet(mode: Mode) -> [u8; 3] {
    [Command::SetMode as u8, mode as u8, Command::SetMode as u8]
}

/// Builds a packet clearing positions `start..=end`.
pub fn build_clear_packet(start: u8, end: u8) -> [u8; 6] {
    [
        COMMAND_PREFIX[0],
        COMMAND_PREFIX[1],
        Command::Clear as u8,
        start,
        end,
        COMMAND_SUFFIX,
    ]
}

/// Builds a packet moving the cursor to an encoded position.
pub fn build_cursor_packet(position: u8) -> [u8; 5] {
    [
        COMMAND_PREFIX[0],
        COMMAND_PREFIX[1],
        Command::SetCursor as u8,
        position,
        COMMAND_SUFFIX,
    ]
}

/// Encodes at most `max_chars` characters of `text`, one byte per character.
///
/// Characters up to U+00FF are sent as their Latin-1 byte.
pub fn encode_text(text: &str, max_chars: usize) -> Vec<u8> {
    text.chars()
        .take(max_chars)
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT_CHAR))
        .collect()
}
