/// Selectors and names used by the startup pass.
///
/// Elements styled as a basic list lose that class once the page loads.
pub const STRIP_SELECTOR: &str = ".list--basic";
pub const STRIP_CLASS: &str = "list--basic";

// Property probed on `document.documentElement` to detect native class lists
pub const CAPABILITY_PROPERTY: &str = "classList";
