use thiserror::Error;

/// The one table this service may insert into. The name carries a typo
/// that exists in the production schema; do not correct it here.
pub const ATTENDANCE_TABLE: &str = "PMO_DAILY_ATTENDNACE";

/// Writable columns, in the exact order and comma form every statement
/// must carry them.
pub const EXPECTED_COLUMNS: &str =
    "EMPLOYEE_ID, EMPLOYEE_TYPE, ATTENDANCE_TYPE, ATTENDANCE_DATE, ATTENDANCE_TIME, INSERTED_BY_ID";

/// Tokens that must never appear anywhere in a statement. Plain substring
/// match on the uppercased text: a quoted value containing one of these is
/// rejected too, matching the behavior of the service this replaces.
pub const DENYLIST: &[&str] = &[
    "DELETE", "UPDATE", "DROP", "TRUNCATE", "ALTER", "CREATE", "GRANT", "REVOKE", "SELECT",
    "UNION", "JOIN", "EXEC", "EXECUTE", "INTO OUTFILE", "--", "/*", "*/",
];

/// A statement that has passed every allow-list rule. Constructed only by
/// [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStatement(String);

impl GeneratedStatement {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query is not an INSERT into {ATTENDANCE_TABLE}: {0}")]
    WrongShape(String),

    #[error("query does not list the required columns ({EXPECTED_COLUMNS}): {0}")]
    MissingColumns(String),

    #[error("query has no VALUES clause: {0}")]
    MissingValues(String),

    #[error(
        "query contains disallowed keyword `{keyword}`, indicating a potential security risk: {query}"
    )]
    DeniedKeyword {
        keyword: &'static str,
        query: String,
    },
}

/// Syntactic allow-list over a drafted statement, not a parser: the text
/// must superficially match the one permitted INSERT shape and be free of
/// denylisted keywords. Both the drafter (post-draft) and the executor
/// (pre-execute) call this same function, so the two checks cannot drift.
pub fn validate(stmt: &str) -> Result<GeneratedStatement, ValidationError> {
    let trimmed = stmt.trim();
    let normalized = trimmed.to_uppercase();

    let prefix = format!("INSERT INTO {ATTENDANCE_TABLE} (");
    if !normalized.starts_with(&prefix) {
        return Err(ValidationError::WrongShape(trimmed.to_string()));
    }

    if !normalized.contains(EXPECTED_COLUMNS) {
        return Err(ValidationError::MissingColumns(trimmed.to_string()));
    }

    if !normalized.contains(") VALUES (") {
        return Err(ValidationError::MissingValues(trimmed.to_string()));
    }

    for keyword in DENYLIST.iter().copied() {
        if normalized.contains(keyword) {
            return Err(ValidationError::DeniedKeyword {
                keyword,
                query: trimmed.to_string(),
            });
        }
    }

    Ok(GeneratedStatement(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "INSERT INTO PMO_DAILY_ATTENDNACE (EMPLOYEE_ID, EMPLOYEE_TYPE, ATTENDANCE_TYPE, ATTENDANCE_DATE, ATTENDANCE_TIME, INSERTED_BY_ID) VALUES ('1483', 'Trainee', 'Present', '2025-06-05', '09:00:00', '1483');";

    #[test]
    fn accepts_the_canonical_statement() {
        let validated = validate(GOOD).unwrap();
        assert_eq!(validated.as_str(), GOOD);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let padded = format!("\n  {GOOD}  \n");
        assert_eq!(validate(&padded).unwrap().as_str(), GOOD);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lowered = GOOD.to_lowercase();
        assert!(validate(&lowered).is_ok());
    }

    #[test]
    fn rejects_every_denylisted_keyword() {
        for keyword in DENYLIST {
            let tainted = format!("{GOOD} {keyword}");
            let err = validate(&tainted).unwrap_err();
            assert!(
                matches!(err, ValidationError::DeniedKeyword { .. }),
                "{keyword} slipped through: {err}"
            );
        }
    }

    #[test]
    fn rejects_injection_in_the_middle() {
        let tainted = GOOD.replace("'Present'", "'Present'); DROP TABLE employee; --");
        assert!(matches!(
            validate(&tainted),
            Err(ValidationError::DeniedKeyword { .. })
        ));
    }

    #[test]
    fn rejects_other_tables() {
        let other = GOOD.replace("PMO_DAILY_ATTENDNACE", "PMO_PAYROLL");
        assert!(matches!(
            validate(&other),
            Err(ValidationError::WrongShape(_))
        ));
    }

    #[test]
    fn rejects_missing_or_reordered_columns() {
        let missing = GOOD.replace("ATTENDANCE_TIME, ", "");
        assert!(matches!(
            validate(&missing),
            Err(ValidationError::MissingColumns(_))
        ));

        let reordered = GOOD.replace(
            "EMPLOYEE_ID, EMPLOYEE_TYPE",
            "EMPLOYEE_TYPE, EMPLOYEE_ID",
        );
        assert!(matches!(
            validate(&reordered),
            Err(ValidationError::MissingColumns(_))
        ));
    }

    #[test]
    fn rejects_missing_values_clause() {
        let headless = "INSERT INTO PMO_DAILY_ATTENDNACE (EMPLOYEE_ID, EMPLOYEE_TYPE, ATTENDANCE_TYPE, ATTENDANCE_DATE, ATTENDANCE_TIME, INSERTED_BY_ID);";
        assert!(matches!(
            validate(headless),
            Err(ValidationError::MissingValues(_))
        ));
    }

    #[test]
    fn rejects_prose_around_the_statement() {
        let chatty = format!("Here is your query:\n{GOOD}");
        assert!(matches!(
            validate(&chatty),
            Err(ValidationError::WrongShape(_))
        ));
    }

    // Known limitation carried over from the service this replaces: a
    // legitimate value containing a denylisted substring is rejected.
    #[test]
    fn rejects_legitimate_values_containing_denylisted_substrings() {
        let unlucky = GOOD.replace("'Trainee'", "'Selecta'");
        assert!(matches!(
            validate(&unlucky),
            Err(ValidationError::DeniedKeyword {
                keyword: "SELECT",
                ..
            })
        ));
    }
}
