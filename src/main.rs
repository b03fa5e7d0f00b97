#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

// Hosted builds produce an inert stub so `cargo build`/`cargo test` work on
// the host; the kernel proper is built for x86_64-unknown-none.

#[cfg(target_os = "none")]
use log::info;

/// Message painted onto the top row of the display at boot.
#[cfg(target_os = "none")]
const GREETING: &str = "Hello World!";

#[cfg(target_os = "none")]
bootloader::entry_point!(kernel_main);

#[cfg(target_os = "none")]
fn kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
  greetos::bindriver::init();
  greetos::println!("greetos v{}", greetos::version::VERSION);
  info!("painting greeting row");
  greetos::bindriver::vga_buffer::splash(GREETING);
  info!("boot complete, parking CPU");
  greetos::hlt_cpu!()
}

/// This function is called on panic.
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
  greetos::print_red!("\n\n===== PANIC OCCURED IN KERNEL =====\n{}\n", info);
  greetos::hlt_cpu!()
}

#[cfg(not(target_os = "none"))]
fn main() {}
