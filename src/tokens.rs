// String-level editing of a whitespace-separated `className` attribute.
// Used when the host has no native class list.
use regex::Regex;

/// Matches one class name as a whole token: bounded by whitespace or by the
/// ends of the attribute, so `list` never matches inside `list--basic`.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    re: Regex,
}

impl TokenPattern {
    pub fn new(class_name: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!(r"(\s|^){}(\s|$)", regex::escape(class_name)))?;
        Ok(Self { re })
    }

    #[inline]
    pub fn matches(&self, class_attr: &str) -> bool {
        !class_attr.is_empty() && self.re.is_match(class_attr)
    }

    /// Replace every match with a single space, then trim both ends.
    ///
    /// Matches consume their surrounding whitespace, so back-to-back
    /// duplicates (`"c c"`) leave one copy behind.
    pub fn strip(&self, class_attr: &str) -> String {
        self.re.replace_all(class_attr, " ").trim().to_string()
    }
}

/// Naive append: no duplicate check and no trimming, so `""` becomes `" foo"`.
#[inline]
pub fn append(class_attr: &str, class_name: &str) -> String {
    format!("{} {}", class_attr, class_name)
}
