#[macro_export]
macro_rules! print {
  ($($arg:tt)*) => {{
    $crate::bindriver::vga_buffer::print(format_args!($($arg)*));
    $crate::bindriver::serial::print(format_args!($($arg)*));
  }};
}

#[macro_export]
macro_rules! println {
  () => ($crate::print!("\n"));
  ($fmt:expr) => ($crate::print!(concat!($fmt, "\n")));
  ($fmt:expr, $($arg:tt)*) => ($crate::print!(concat!($fmt, "\n"), $($arg)*));
}

#[macro_export]
macro_rules! print_red {
  ($($arg:tt)*) => {{
    $crate::bindriver::vga_buffer::print_red(format_args!($($arg)*));
    $crate::bindriver::serial::print(format_args!($($arg)*));
  }};
}
