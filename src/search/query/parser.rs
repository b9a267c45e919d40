use super::{
    ast::{Clause, Field, FilterExpr},
    lexer::{lex, Token},
};
use tracing::trace;

pub fn parse(input: &str) -> FilterExpr {
    FilterExpr::new(lex(input).into_iter().map(parse_token).collect())
}

fn parse_token(tok: Token<'_>) -> Clause {
    if let Some((field_raw, rest)) = tok.text.split_once(':') {
        match Field::from_name(field_raw) {
            Some(field) if !rest.is_empty() => {
                return Clause::Field {
                    field,
                    value: rest.to_string(),
                };
            }
            Some(field) => {
                trace!(
                    at = tok.span.start,
                    field = field.as_str(),
                    "field prefix without value, keeping token as free text"
                );
            }
            None => {
                trace!(
                    at = tok.span.start,
                    token = tok.text,
                    "unknown field prefix, keeping token as free text"
                );
            }
        }
    }
    Clause::FreeText(tok.text.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::search::query::ast::{Clause, Field};

    fn field(field: Field, value: &str) -> Clause {
        Clause::Field {
            field,
            value: value.into(),
        }
    }

    fn free(value: &str) -> Clause {
        Clause::FreeText(value.into())
    }

    #[test]
    fn parses_each_known_field() {
        let expr = parse("artist:pearl song:alive type:soundboard country:usa year:1999");
        assert_eq!(
            expr.clauses(),
            &[
                field(Field::Artist, "pearl"),
                field(Field::Song, "alive"),
                field(Field::Type, "soundboard"),
                field(Field::Country, "usa"),
                field(Field::Year, "1999"),
            ]
        );
    }

    #[test]
    fn field_names_are_case_insensitive_and_values_keep_case() {
        let expr = parse("ARTIST:Pearl Song:ALIVE");
        assert_eq!(
            expr.clauses(),
            &[field(Field::Artist, "Pearl"), field(Field::Song, "ALIVE")]
        );
    }

    #[test]
    fn unknown_prefix_stays_free_text_with_colon() {
        let expr = parse("foo:bar");
        assert_eq!(expr.clauses(), &[free("foo:bar")]);
    }

    #[test]
    fn empty_field_value_degrades_to_free_text() {
        let expr = parse("artist: : year:");
        assert_eq!(expr.clauses(), &[free("artist:"), free(":"), free("year:")]);
    }

    #[test]
    fn splits_value_at_first_colon_only() {
        let expr = parse("song:intro:outro");
        assert_eq!(expr.clauses(), &[field(Field::Song, "intro:outro")]);
    }

    #[test]
    fn leading_colon_is_free_text() {
        let expr = parse(":artist");
        assert_eq!(expr.clauses(), &[free(":artist")]);
    }

    #[test]
    fn repeated_fields_are_all_kept() {
        let expr = parse("artist:pearl artist:jam");
        assert_eq!(
            expr.clauses(),
            &[field(Field::Artist, "pearl"), field(Field::Artist, "jam")]
        );
    }

    #[test]
    fn multi_word_field_value_is_not_merged() {
        let expr = parse("artist:pearl jam");
        assert_eq!(
            expr.clauses(),
            &[field(Field::Artist, "pearl"), free("jam")]
        );
    }

    #[test]
    fn adjacent_free_text_is_not_merged() {
        let expr = parse("live  at   wembley");
        assert_eq!(
            expr.clauses(),
            &[free("live"), free("at"), free("wembley")]
        );
    }

    #[test]
    fn blank_input_yields_no_clauses() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert!(parse("\t\n").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let input = "Artist:Nirvana unplugged year:1993 x:y";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn renders_back_to_normalized_query_text() {
        let expr = parse("  ARTIST:Pearl   jam  foo:bar ");
        assert_eq!(expr.to_string(), "artist:Pearl jam foo:bar");
    }
}
