//! The display driver, which uses the command module at a slightly higher level. It provides
//! initialization and full-frame clearing, and renders fixed-width 5x7 text onto the character
//! cell grid.
//!
//! The grid is 21 cells of 6 pixel columns across by 8 rows, one row per hardware page. Each cell
//! write is independently addressed; the driver keeps no cursor and no framebuffer.

use command::consts::*;
use command::{Command, MemoryMode, Transaction};
use font;
use interface;
use Error;

/// The basic driver for the display.
///
/// All methods issue their bus transactions strictly in order, each completed before the next
/// begins. The driver performs no locking of its own; `&mut self` throughout leaves serialization
/// of access to the single physical device with the owner of the `Display`.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver communicating through `iface`. No bus traffic occurs until
    /// `init` (or another method) is called.
    pub fn new(iface: DI) -> Self {
        Display { iface }
    }

    /// Initialize the display: `reset` followed by `blank`. Aborts on the first failure.
    pub fn init(&mut self) -> Result<(), Error<DI::Error>> {
        self.reset()?;
        self.blank()
    }

    /// Transmit the fixed init sequence as a single transaction: display off, page addressing
    /// mode, page 0, column 0, charge pump on, display on.
    pub fn reset(&mut self) -> Result<(), Error<DI::Error>> {
        let mut txn = Transaction::new();
        for &cmd in &[
            Command::SetDisplayOn(false),
            Command::SetMemoryMode(MemoryMode::Page),
            Command::SetPageStart(0),
            Command::SetColumnHigh(0),
            Command::SetColumnLow(0),
            Command::SetChargePump(true),
            Command::SetDisplayOn(true),
        ] {
            txn.command(cmd).map_err(|_| Error::InvalidArgument)?;
        }
        self.send(&txn)
    }

    /// Clear the entire frame to dark: reset the column address, then burst 128 zero bytes into
    /// each of the 8 pages, one transaction per page in ascending order.
    ///
    /// The clear is not atomic. A transport failure part way through is returned immediately and
    /// leaves the later pages untouched.
    pub fn blank(&mut self) -> Result<(), Error<DI::Error>> {
        let mut home = Transaction::new();
        home.command(Command::SetColumnHigh(0))
            .map_err(|_| Error::InvalidArgument)?;
        home.command(Command::SetColumnLow(0))
            .map_err(|_| Error::InvalidArgument)?;
        self.send(&home)?;

        for page in 0..NUM_PAGES {
            let mut txn = Transaction::new();
            txn.command(Command::SetPageStart(page))
                .map_err(|_| Error::InvalidArgument)?;
            txn.data(&[0u8; NUM_PIXEL_COLS as usize])
                .map_err(|_| Error::InvalidArgument)?;
            self.send(&txn)?;
        }
        Ok(())
    }

    /// Render one character at grid cell (`row`, `col`).
    ///
    /// `row` selects a page directly (0-7) and `col` a character cell (0-20); `c` must be
    /// printable ASCII. Anything else returns `Error::InvalidArgument` before any bus traffic.
    /// With `invert` set the glyph is rendered dark-on-lit, spacer column included, so adjacent
    /// inverted cells form an unbroken highlight.
    ///
    /// Two transactions are issued: one positioning the address pointers, and one repeating the
    /// positioning followed by the 6-byte cell data burst.
    pub fn set_char(
        &mut self,
        row: u8,
        col: u8,
        c: char,
        invert: bool,
    ) -> Result<(), Error<DI::Error>> {
        if row > PAGE_MAX || col > CELL_COL_MAX {
            return Err(Error::InvalidArgument);
        }
        let columns = font::glyph(c).ok_or(Error::InvalidArgument)?;
        let pixel_col = col * CELL_WIDTH;

        let mut position = Transaction::new();
        Self::position(&mut position, row, pixel_col)?;
        self.send(&position)?;

        let mask = match invert {
            true => 0xFF,
            false => 0x00,
        };
        // The trailing cell byte keeps its mask value: the spacer column.
        let mut cell = [mask; CELL_WIDTH as usize];
        for (out, &glyph_col) in cell.iter_mut().zip(columns.iter()) {
            *out = glyph_col ^ mask;
        }

        let mut burst = Transaction::new();
        Self::position(&mut burst, row, pixel_col)?;
        burst.data(&cell).map_err(|_| Error::InvalidArgument)?;
        self.send(&burst)
    }

    /// Render `text` at consecutive cells starting at (`row`, `col`).
    ///
    /// Stops at the first character that fails, leaving the already-rendered ones in place. Does
    /// not wrap at the right edge: a string running past cell 20 fails there with
    /// `Error::InvalidArgument`.
    pub fn set_chars(
        &mut self,
        row: u8,
        col: u8,
        text: &str,
        invert: bool,
    ) -> Result<(), Error<DI::Error>> {
        let mut cell_col = col;
        for c in text.chars() {
            self.set_char(row, cell_col, c, invert)?;
            cell_col += 1;
        }
        Ok(())
    }

    fn position(txn: &mut Transaction, row: u8, pixel_col: u8) -> Result<(), Error<DI::Error>> {
        txn.command(Command::SetColumnHigh(pixel_col >> 4))
            .map_err(|_| Error::InvalidArgument)?;
        txn.command(Command::SetColumnLow(pixel_col & 0x0F))
            .map_err(|_| Error::InvalidArgument)?;
        txn.command(Command::SetPageStart(row))
            .map_err(|_| Error::InvalidArgument)
    }

    fn send(&mut self, txn: &Transaction) -> Result<(), Error<DI::Error>> {
        self.iface.send(txn.bytes()).map_err(Error::Bus)
    }
}
