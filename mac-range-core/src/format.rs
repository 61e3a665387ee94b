use crate::mac::MacAddr;
use crate::range::Span;

/// Group a decimal identifier into blocks of four digits from the right.
///
/// `"544426672"` becomes `"5 4442 6672"`.
pub fn group_id_digits(id: &str) -> String {
    let digits: Vec<char> = id.chars().collect();
    let mut groups: Vec<String> = digits
        .rchunks(4)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(" ")
}

/// Render an identifier span as `start-end`.
pub fn id_span_display(span: &Span<u32>) -> String {
    format!("{}-{}", span.start, span.end)
}

/// Render a MAC value span with canonical colon-delimited bounds.
pub fn mac_span_display(span: &Span<u64>) -> String {
    format!(
        "{} - {}",
        MacAddr::from_value(span.start),
        MacAddr::from_value(span.end)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{group_id_digits, id_span_display, mac_span_display};
    use crate::range::Span;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_id_digits("544426672"), "5 4442 6672");
        assert_eq!(group_id_digits("1234"), "1234");
        assert_eq!(group_id_digits("12345"), "1 2345");
        assert_eq!(group_id_digits(""), "");
    }

    #[test]
    fn id_span_renders_plain_bounds() {
        assert_eq!(id_span_display(&Span::new(540_278_784, 541_065_215)), "540278784-541065215");
    }

    #[test]
    fn mac_span_renders_colon_bounds() {
        let span = Span::new(0x0017_FC34_0000u64, 0x0017_FC3F_FFFFu64);
        assert_eq!(mac_span_display(&span), "00:17:FC:34:00:00 - 00:17:FC:3F:FF:FF");
    }
}
