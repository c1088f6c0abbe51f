/// The bus-transport seam of the driver.
///
/// One call to `send` must map to exactly one atomic bus transaction carrying `buf` to the
/// display, bounded by whatever timeout the transport implements. The driver relies on
/// transactions either completing whole or failing; no partial-write semantics are expected.
pub trait DisplayInterface {
    type Error;
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

pub mod i2c {
    //! The I2C interface of the SSD1306, using the D/C# control-byte protocol. The alternative
    //! SPI wiring of the chip replaces control bytes with a D/C GPIO and is not supported here.

    use hal;

    use super::DisplayInterface;

    pub struct I2cInterface<I2C> {
        /// The I2C master device the SSD1306 is connected to.
        i2c: I2C,
        /// The 7-bit address the display module answers on, usually 0x3C or 0x3D depending on
        /// the SA0 strap. The HAL appends the direction bit.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new I2C interface to communicate with the display driver. `i2c` is the I2C
        /// master device, and `address` is the display's 7-bit slave address.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        type Error = I2C::Error;

        fn send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.i2c.write(self.address, buf)
        }
    }
}
