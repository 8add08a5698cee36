use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

/// Join argument words with single spaces, trimming the result
pub fn join_argument<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn new_command_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn current_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_argument_uses_single_spaces() {
        assert_eq!(join_argument("a  b   c".split_whitespace()), "a b c");
        assert_eq!(join_argument(Vec::<&str>::new()), "");
    }

    #[test]
    fn current_timestamp_is_rfc3339() {
        let ts = current_timestamp();
        assert!(OffsetDateTime::parse(&ts, &Rfc3339).is_ok());
    }

    #[test]
    fn command_ids_are_unique() {
        assert_ne!(new_command_id(), new_command_id());
    }
}
