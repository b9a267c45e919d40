use std::fmt;

/// Parsed search box input. Clauses are AND-ed; no clauses matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterExpr {
    clauses: Vec<Clause>,
}

impl FilterExpr {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, clause) in self.clauses.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Field { field: Field, value: String },
    FreeText(String),
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Field { field, value } => write!(f, "{}:{}", field.as_str(), value),
            Clause::FreeText(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Artist,
    Song,
    Type,
    Country,
    Year,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Artist,
        Field::Song,
        Field::Type,
        Field::Country,
        Field::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Artist => "artist",
            Field::Song => "song",
            Field::Type => "type",
            Field::Country => "country",
            Field::Year => "year",
        }
    }

    /// Case-insensitive lookup of a field prefix.
    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL
            .into_iter()
            .find(|field| name.eq_ignore_ascii_case(field.as_str()))
    }
}
