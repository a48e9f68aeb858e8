#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{ParseError, SetCookie, find_cookie, parse_cookie_header};

    #[test]
    fn test_set_cookie_wire_format() {
        let cookie = SetCookie::new("playerPokemon", "{}", Duration::from_secs(86400));

        assert_eq!(
            cookie.to_wire_format(),
            "playerPokemon={}; path=/; max-age=86400;"
        );
    }

    #[test]
    fn test_parse_header() {
        let pairs = parse_cookie_header("a=1; b=2").unwrap();

        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_value_with_equals() {
        let header = r#"selectedPokemon={"name":"a=b"}; theme=dark"#;
        let value = find_cookie(header, "selectedPokemon").unwrap();

        assert_eq!(value.as_deref(), Some(r#"{"name":"a=b"}"#));
    }

    #[test]
    fn test_find_missing() {
        let value = find_cookie("a=1", "b").unwrap();

        assert!(value.is_none());
    }

    #[test]
    fn test_parse_empty() {
        let pairs = parse_cookie_header("").unwrap();

        assert!(pairs.is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_cookie_header("a=1; garbage").is_err());
        assert!(parse_cookie_header("=1").is_err());
    }

    #[test]
    fn test_parse_set_cookie() {
        let line = r#"playerPokemon={"name":"Pikachu","hp":35}; path=/; max-age=86400;"#;
        let cookie = SetCookie::parse(line).unwrap();

        assert_eq!(cookie.name, "playerPokemon");
        assert_eq!(cookie.value, r#"{"name":"Pikachu","hp":35}"#);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age, Duration::from_secs(86400));
        assert_eq!(cookie.to_wire_format(), line);
    }

    #[test]
    fn test_parse_set_cookie_attributes() {
        let line = "a=1; Max-Age=60; Path=/battle; SameSite=Lax";
        let cookie = SetCookie::parse(line).unwrap();

        assert_eq!(cookie.path, "/battle");
        assert_eq!(cookie.max_age, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_set_cookie_invalid() {
        let err = SetCookie::parse("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::EmptyRecord(_))
        ));

        let err = SetCookie::parse("a=1; path=/").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::MissingField(field)) if field == "max-age"
        ));

        assert!(SetCookie::parse("a=1; max-age=soon").is_err());
        assert!(SetCookie::parse("=1; max-age=10").is_err());
    }
}
