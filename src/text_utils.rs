// src/text_utils.rs

/// Nombre de entidad más largo de HTML5 (`&CounterClockwiseContourIntegral;`).
const MAX_ENTITY_LEN: usize = 34;

/// Decodifica entidades HTML (`&amp;`, `&euml;`, `&#039;`, `&#x27;`...).
/// Las que no se reconocen, y las referencias a caracteres de control, se dejan tal cual.
pub fn decode_html_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let decoded = tail
            .find(';')
            .filter(|&end| end > 1 && end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&tail[..=end]).map(|text| (text, end)));

        match decoded {
            Some((text, end)) => {
                out.push_str(&text);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// `entity` incluye el `&` y el `;`.
fn decode_entity(entity: &str) -> Option<String> {
    let name = &entity[1..entity.len() - 1];

    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code)
            .filter(|c| is_printable(*c))
            .map(String::from);
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    // Tabla completa de entidades con nombre de HTML5. Un `;` sobrante indica que solo
    // se decodificó un prefijo heredado (`&ampx;`), y eso no cuenta.
    let decoded = html_escape::decode_html_entities(entity);
    let whole = name == "semi" || !decoded.ends_with(';');
    (decoded != entity && whole).then(|| decoded.into_owned())
}

/// Fuera NUL y los controles C0/C1; el espacio en blanco sí vale.
fn is_printable(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::decode_html_entities;

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            decode_html_entities("Which of these is &quot;Tom &amp; Jerry&quot;?"),
            "Which of these is \"Tom & Jerry\"?"
        );
        assert_eq!(decode_html_entities("Don&#039;t"), "Don't");
        assert_eq!(decode_html_entities("Don&#x27;t"), "Don't");
        assert_eq!(decode_html_entities("Pok&eacute;mon"), "Pokémon");
    }

    #[test]
    fn decodes_less_common_named_entities() {
        assert_eq!(decode_html_entities("Zo&euml;"), "Zoë");
        assert_eq!(decode_html_entities("na&iuml;ve"), "naïve");
        assert_eq!(decode_html_entities("3 &times; 4"), "3 × 4");
        assert_eq!(decode_html_entities("&frac12; cup"), "½ cup");
        assert_eq!(decode_html_entities("m&sup2;"), "m²");
        assert_eq!(decode_html_entities("&Delta;v"), "Δv");
        assert_eq!(decode_html_entities("C&ocirc;te"), "Côte");
    }

    #[test]
    fn leaves_unknown_or_broken_entities_alone() {
        assert_eq!(decode_html_entities("AT&T"), "AT&T");
        assert_eq!(decode_html_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_html_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_html_entities("trailing &"), "trailing &");
        assert_eq!(decode_html_entities("R&D; then &amp;"), "R&D; then &");
        assert_eq!(decode_html_entities("&ampx;"), "&ampx;");
    }

    #[test]
    fn control_character_references_stay_verbatim() {
        assert_eq!(decode_html_entities("a&#0;b"), "a&#0;b");
        assert_eq!(decode_html_entities("a&#x1B;b"), "a&#x1B;b");
        assert_eq!(decode_html_entities("a&#127;b"), "a&#127;b");
        assert_eq!(decode_html_entities("a&#x85;b"), "a&#x85;b");
        assert_eq!(decode_html_entities("tab&#9;here"), "tab\there");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(decode_html_entities("Paris"), "Paris");
        assert_eq!(decode_html_entities(""), "");
    }
}
