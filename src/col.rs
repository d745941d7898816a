use std::borrow::Cow;

use smol_str::SmolStr;

use crate::value::Array;

pub type Columns = Array<SmolStr>;

/// Positional field-list arguments accepted by [`crate::Builder::fields`].
pub trait IntoColumns {
    fn into_columns(self) -> Columns;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Columns {
        Columns::One(SmolStr::new(self))
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Columns {
        Columns::One(SmolStr::from(self))
    }
}

impl IntoColumns for SmolStr {
    fn into_columns(self) -> Columns {
        Columns::One(self)
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Columns {
        Columns::Many(self.iter().map(SmolStr::new).collect())
    }
}

impl<const N: usize> IntoColumns for [String; N] {
    fn into_columns(self) -> Columns {
        Columns::Many(self.into_iter().map(SmolStr::from).collect())
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Columns {
        Columns::Many(self.iter().map(SmolStr::new).collect())
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Columns {
        Columns::Many(self.into_iter().map(SmolStr::new).collect())
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Columns {
        Columns::Many(self.into_iter().map(SmolStr::from).collect())
    }
}

impl IntoColumns for Columns {
    fn into_columns(self) -> Columns {
        self
    }
}

/// Uppercases every standalone `as`, whatever its casing, so aliases keep
/// reading as the keyword once the field list is filtered.
pub(crate) fn canonicalize_alias(field: &str) -> Cow<'_, str> {
    let bytes = field.as_bytes();
    let mut canonical: Option<String> = None;
    for (i, w) in bytes.windows(2).enumerate() {
        if (w[0] | 0x20) != b'a' || (w[1] | 0x20) != b's' || w == b"AS" {
            continue;
        }
        let before = i == 0 || !is_word_byte(bytes[i - 1]);
        let after = bytes.get(i + 2).is_none_or(|b| !is_word_byte(*b));
        if before && after {
            canonical
                .get_or_insert_with(|| field.to_owned())
                .replace_range(i..i + 2, "AS");
        }
    }
    canonical.map_or(Cow::Borrowed(field), Cow::Owned)
}

// non-ascii bytes count as word bytes so multi-byte letters never split a word
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'*' || b >= 0x80
}
