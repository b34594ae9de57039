pub struct Config {
    /// Skips the banner printed before any output.
    pub no_banner: bool,

    /// Verbosity reduction, counted from repeated `-q` flags.
    ///
    /// `1` hides banner and headers, `2` or more also hides everything
    /// logged below error level. The tree itself is always printed.
    pub quiet: u8,
}
