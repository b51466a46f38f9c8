//! Help screen shown for help requests and unknown config names

/// Full help text, mirroring the tool's three flavors
pub const HELP: &str = "
                      ESBNB, the ESLint airbnb config installer

Install ESLint with the Airbnb ESLint rules, including ECMAScript 6+ and React (default)
$ esbnb

Install ESLint with the Airbnb ESLint rules, including ECMAScript 6+ (base)
$ esbnb base

Install ESLint with the Airbnb ESLint rules, including ECMAScript 5 and below (legacy)
$ esbnb legacy

A .eslintrc file will be created if not already and properly configured.
";

/// Print the help screen to stdout
///
/// Written with `println!` rather than the logger so it shows up even
/// when logging is filtered down.
#[inline]
pub fn print_help() {
    println!("{HELP}");
}
