//! Decoding of the few character entities the renderer understands

/// How far past the `&` a terminating `;` is searched for
const ENTITY_WINDOW: usize = 20;

/// Decode the entity at the start of `span`.
///
/// `span` begins at the `&` marker. Returns the single decoded byte, or
/// `None` when no `;` follows within the window or the name is unknown;
/// the caller then emits `span` unchanged.
///
/// Mappings: `quot` gives a single quote (not `"`), `gt` gives `>`, and
/// `#<digits>` gives the decimal value truncated to one byte. A value that
/// truncates to zero counts as a failed decode.
pub fn decode(span: &[u8]) -> Option<u8> {
    if span.first() != Some(&b'&') {
        return None;
    }

    let window = span.len().min(ENTITY_WINDOW);
    let end = span[1..window].iter().position(|&b| b == b';')? + 1;
    let decoded = translate(&span[1..end])?;

    (decoded != 0).then_some(decoded)
}

fn translate(name: &[u8]) -> Option<u8> {
    match name {
        b"quot" => Some(b'\''),
        b"gt" => Some(b'>'),
        [b'#', digits @ ..] => Some(numeric(digits)),
        _ => None,
    }
}

/// Leading decimal digits with an optional sign, wrapped to a byte.
/// Parsing stops at the first non-digit.
fn numeric(text: &[u8]) -> u8 {
    let (negative, digits) = match text {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, text),
    };

    let value = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u8, |acc, &b| acc.wrapping_mul(10).wrapping_add(b - b'0'));

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
