#[macro_use]
pub mod cio;
pub mod serial;
#[macro_use]
pub mod vga_buffer;

use log::debug;

pub fn init() {
  serial::init();
  debug!("serial logging online");
}
