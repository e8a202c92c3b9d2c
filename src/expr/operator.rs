use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Nin,
    Contains,
    MemberOf,
    StartsWith,
    EndsWith,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::In,
        Operator::Nin,
        Operator::Contains,
        Operator::MemberOf,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    /// Name written into serialized comparison records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::In => "in",
            Operator::Nin => "nin",
            Operator::Contains => "contains",
            Operator::MemberOf => "member_of",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::In => "IN",
            Operator::Nin => "NOT IN",
            Operator::Contains => "CONTAINS",
            Operator::MemberOf => "MEMBER OF",
            Operator::StartsWith => "STARTS WITH",
            Operator::EndsWith => "ENDS WITH",
        }
    }
}

/// Accepts the serialized names as well as the symbolic spellings, case-insensitively.
impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_uppercase().as_str() {
            "EQ" | "=" | "==" => Ok(Operator::Eq),
            "NEQ" | "<>" | "!=" => Ok(Operator::Neq),
            "LT" | "<" => Ok(Operator::Lt),
            "LTE" | "<=" => Ok(Operator::Lte),
            "GT" | ">" => Ok(Operator::Gt),
            "GTE" | ">=" => Ok(Operator::Gte),
            "IN" => Ok(Operator::In),
            "NIN" | "NOT IN" => Ok(Operator::Nin),
            "CONTAINS" => Ok(Operator::Contains),
            "MEMBER_OF" | "MEMBER OF" => Ok(Operator::MemberOf),
            "STARTS_WITH" | "STARTS WITH" => Ok(Operator::StartsWith),
            "ENDS_WITH" | "ENDS WITH" => Ok(Operator::EndsWith),
            _ => Err(format!("Invalid comparison operator: '{}'", value)),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::try_from(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::Operator;

    #[test]
    fn operator_wire_names_parse_back() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.as_str()), Ok(op));
        }
    }

    #[test]
    fn operator_symbols_parse_back() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn operator_aliases() {
        assert_eq!("!=".parse::<Operator>(), Ok(Operator::Neq));
        assert_eq!("Member_Of".parse::<Operator>(), Ok(Operator::MemberOf));
        assert_eq!(" gte ".parse::<Operator>(), Ok(Operator::Gte));
    }

    #[test]
    fn operator_invalid() {
        let err = Operator::try_from("like").unwrap_err();
        assert_eq!(err, "Invalid comparison operator: 'like'");
    }
}
