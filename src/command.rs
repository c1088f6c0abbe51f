//! The command set for the SSD1306, and the control-byte framing its I2C protocol requires.
//!
//! Note 1: The display RAM of the SSD1306 is arranged in 8 pages of 128 columns, where each
//! column is one byte driving 8 vertically-adjacent pixels, bit 0 topmost. Anywhere there is a
//! "page" address, these refer to horizontal bands of 8 pixel rows; column addresses refer to
//! single-pixel-wide byte columns within the current page.
//!
//! Note 2: On the I2C bus every payload byte is tagged by a preceding control byte. This driver
//! re-asserts a control byte before every command byte rather than batching commands under one
//! control byte, trading a little bus efficiency for simpler framing. A data burst is opened with
//! a single control byte whose cleared continuation bit marks the rest of the transaction as raw
//! display RAM data.

pub mod consts {
    //! Constants describing the geometry of the display and the character-cell grid on it.
    pub const NUM_PAGES: u8 = 8;
    pub const NUM_PIXEL_COLS: u8 = 128;
    /// Width of one character cell in pixel columns: 5 glyph columns plus 1 spacer.
    pub const CELL_WIDTH: u8 = 6;
    /// Number of whole character cells that fit across the display.
    pub const NUM_CELL_COLS: u8 = NUM_PIXEL_COLS / CELL_WIDTH;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
    pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
    pub const CELL_COL_MAX: u8 = NUM_CELL_COLS - 1;
}

use self::consts::*;

/// Control byte tagging the next byte as a command, continuation bit set so that another control
/// byte follows it.
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte with D/C# set and the continuation bit clear: every byte from here to the end of
/// the transaction is raw display RAM data.
pub const CONTROL_DATA: u8 = 0x40;

/// The memory addressing mode, which controls how the controller's address pointers advance as
/// data bytes arrive.
#[derive(Clone, Copy)]
pub enum MemoryMode {
    /// The column address increments after each data byte, wrapping to the next page at the end
    /// of the row.
    Horizontal,
    /// The page address increments after each data byte, wrapping to the next column at the
    /// bottom of the display.
    Vertical,
    /// The column address increments and wraps within the current page; the page address never
    /// changes. This is the mode the driver runs the display in.
    Page,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the low nibble of the column address pointer. Range 0-15.
    SetColumnLow(u8),
    /// Set the high nibble of the column address pointer. Range 0-15.
    SetColumnHigh(u8),
    /// Set the memory addressing mode. See enum for details.
    SetMemoryMode(MemoryMode),
    /// Set the page the next data write starts at. Range 0-7.
    SetPageStart(u8),
    /// Enable or disable the internal charge pump that generates the OLED panel drive voltage.
    /// Must be enabled before `SetDisplayOn(true)` will light anything.
    SetChargePump(bool),
    /// Control whether the panel is driven at all.
    SetDisplayOn(bool),
}

macro_rules! ok_command {
    ($buf:ident, $op0:expr) => {{
        $buf[0] = $op0;
        Ok(($buf, 1))
    }};
    ($buf:ident, $op0:expr, $op1:expr) => {{
        $buf[0] = $op0;
        $buf[1] = $op1;
        Ok(($buf, 2))
    }};
}

impl Command {
    /// Encode into at most two opcode bytes. Each opcode byte receives its own control byte when
    /// framed into a transaction.
    fn encode(self) -> Result<([u8; 2], usize), ()> {
        let mut buf = [0u8; 2];
        match self {
            Command::SetColumnLow(nibble) => match nibble {
                0..=0xF => ok_command!(buf, 0x00 | nibble),
                _ => Err(()),
            },
            Command::SetColumnHigh(nibble) => match nibble {
                0..=0xF => ok_command!(buf, 0x10 | nibble),
                _ => Err(()),
            },
            Command::SetMemoryMode(mode) => ok_command!(
                buf,
                0x20,
                match mode {
                    MemoryMode::Horizontal => 0x00,
                    MemoryMode::Vertical => 0x01,
                    MemoryMode::Page => 0x02,
                }
            ),
            Command::SetPageStart(page) => match page {
                0..=PAGE_MAX => ok_command!(buf, 0xB0 | page),
                _ => Err(()),
            },
            Command::SetChargePump(ena) => ok_command!(
                buf,
                0x8D,
                match ena {
                    true => 0x14,
                    false => 0x10,
                }
            ),
            Command::SetDisplayOn(ena) => ok_command!(
                buf,
                match ena {
                    true => 0xAF,
                    false => 0xAE,
                }
            ),
        }
    }
}

/// Capacity of a transaction buffer: a framed command prefix plus one full page of data, the
/// largest transaction the driver ever builds.
pub const TRANSACTION_CAPACITY: usize = 3 + NUM_PIXEL_COLS as usize;

/// One bus transaction under assembly: control-byte-framed command and data bytes accumulated in
/// a fixed stack buffer.
pub struct Transaction {
    buf: [u8; TRANSACTION_CAPACITY],
    len: usize,
}

impl Transaction {
    pub fn new() -> Self {
        Transaction {
            buf: [0u8; TRANSACTION_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) -> Result<(), ()> {
        if self.len == TRANSACTION_CAPACITY {
            return Err(());
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Append a command, prefixing each of its opcode bytes with a command control byte. Fails if
    /// the command's argument is out of range or the buffer is full.
    pub fn command(&mut self, cmd: Command) -> Result<(), ()> {
        let (ops, len) = cmd.encode()?;
        for &op in &ops[..len] {
            self.push(CONTROL_COMMAND)?;
            self.push(op)?;
        }
        Ok(())
    }

    /// Append a data burst: one data control byte, then `bytes` raw. The cleared continuation bit
    /// makes the controller treat everything up to the stop condition as data, so nothing may be
    /// appended after this.
    pub fn data(&mut self, bytes: &[u8]) -> Result<(), ()> {
        self.push(CONTROL_DATA)?;
        for &b in bytes {
            self.push(b)?;
        }
        Ok(())
    }

    /// The assembled wire bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(cmd: Command) -> Result<Vec<u8>, ()> {
        let mut txn = Transaction::new();
        txn.command(cmd)?;
        Ok(txn.bytes().to_vec())
    }

    #[test]
    fn set_column_low() {
        assert_eq!(framed(Command::SetColumnLow(0)), Ok(vec![0x80, 0x00]));
        assert_eq!(framed(Command::SetColumnLow(0xC)), Ok(vec![0x80, 0x0C]));
        assert_eq!(framed(Command::SetColumnLow(0x10)), Err(()));
    }

    #[test]
    fn set_column_high() {
        assert_eq!(framed(Command::SetColumnHigh(0)), Ok(vec![0x80, 0x10]));
        assert_eq!(framed(Command::SetColumnHigh(0x7)), Ok(vec![0x80, 0x17]));
        assert_eq!(framed(Command::SetColumnHigh(0x10)), Err(()));
    }

    #[test]
    fn set_memory_mode() {
        assert_eq!(
            framed(Command::SetMemoryMode(MemoryMode::Horizontal)),
            Ok(vec![0x80, 0x20, 0x80, 0x00])
        );
        assert_eq!(
            framed(Command::SetMemoryMode(MemoryMode::Vertical)),
            Ok(vec![0x80, 0x20, 0x80, 0x01])
        );
        assert_eq!(
            framed(Command::SetMemoryMode(MemoryMode::Page)),
            Ok(vec![0x80, 0x20, 0x80, 0x02])
        );
    }

    #[test]
    fn set_page_start() {
        assert_eq!(framed(Command::SetPageStart(0)), Ok(vec![0x80, 0xB0]));
        assert_eq!(framed(Command::SetPageStart(7)), Ok(vec![0x80, 0xB7]));
        assert_eq!(framed(Command::SetPageStart(8)), Err(()));
    }

    #[test]
    fn set_charge_pump() {
        assert_eq!(
            framed(Command::SetChargePump(true)),
            Ok(vec![0x80, 0x8D, 0x80, 0x14])
        );
        assert_eq!(
            framed(Command::SetChargePump(false)),
            Ok(vec![0x80, 0x8D, 0x80, 0x10])
        );
    }

    #[test]
    fn set_display_on() {
        assert_eq!(framed(Command::SetDisplayOn(true)), Ok(vec![0x80, 0xAF]));
        assert_eq!(framed(Command::SetDisplayOn(false)), Ok(vec![0x80, 0xAE]));
    }

    #[test]
    fn data_burst() {
        let mut txn = Transaction::new();
        txn.command(Command::SetPageStart(3)).unwrap();
        txn.data(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(txn.bytes(), &[0x80, 0xB3, 0x40, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn full_page_burst_fits() {
        let mut txn = Transaction::new();
        txn.command(Command::SetPageStart(0)).unwrap();
        assert_eq!(txn.data(&[0u8; consts::NUM_PIXEL_COLS as usize]), Ok(()));
        assert_eq!(txn.bytes().len(), TRANSACTION_CAPACITY);
    }

    #[test]
    fn overflow_rejected() {
        let mut txn = Transaction::new();
        txn.command(Command::SetPageStart(0)).unwrap();
        assert_eq!(txn.data(&[0u8; TRANSACTION_CAPACITY]), Err(()));
    }
}
