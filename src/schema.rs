/// Semantic fields the lookup reads from a sheet row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    RollNumber,
    Address,
    Marksheet,
    Notes,
    Course,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::RollNumber,
        Field::Address,
        Field::Marksheet,
        Field::Notes,
        Field::Course,
    ];

    /// Lower-case fragments that identify this field's header cell.
    pub fn needles(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["name"],
            Field::RollNumber => &["rollno", "roll no"],
            Field::Address => &["address"],
            Field::Marksheet => &["marksheet"],
            Field::Notes => &["notes"],
            Field::Course => &["course"],
        }
    }

    fn matches_header(self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.needles().iter().any(|needle| header.contains(*needle))
    }
}

/// Column positions of each semantic field, derived from a header row
///
/// Built once per fetched sheet by [`ResolvedSchema::resolve`] and handed to
/// every downstream read, so the fuzzy header matching lives in one place.
/// `None` means no header cell matched; reads through it yield nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub name: Option<usize>,
    pub roll_number: Option<usize>,
    pub address: Option<usize>,
    pub marksheet: Option<usize>,
    pub notes: Option<usize>,
    pub course: Option<usize>,
}

impl ResolvedSchema {
    /// Resolve every field against `header`
    ///
    /// For each field the header cells are scanned left to right and the first
    /// cell whose lower-cased text contains one of the field's needles wins.
    /// Later matching columns are ignored.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Self {
        let find = |field: Field| {
            header
                .iter()
                .position(|cell| field.matches_header(cell.as_ref()))
        };

        ResolvedSchema {
            name: find(Field::Name),
            roll_number: find(Field::RollNumber),
            address: find(Field::Address),
            marksheet: find(Field::Marksheet),
            notes: find(Field::Notes),
            course: find(Field::Course),
        }
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        match field {
            Field::Name => self.name,
            Field::RollNumber => self.roll_number,
            Field::Address => self.address,
            Field::Marksheet => self.marksheet,
            Field::Notes => self.notes,
            Field::Course => self.course,
        }
    }

    /// Cell holding `field` in `row`, or `None` if the column is unresolved
    /// or the row is too short to reach it.
    pub fn cell<'r, S: AsRef<str>>(&self, row: &'r [S], field: Field) -> Option<&'r str> {
        self.column(field)
            .and_then(|index| row.get(index))
            .map(|cell| cell.as_ref())
    }

    /// Like [`ResolvedSchema::cell`] but substitutes the empty string.
    pub fn text<'r, S: AsRef<str>>(&self, row: &'r [S], field: Field) -> &'r str {
        self.cell(row, field).unwrap_or("")
    }

    /// Fields that no header cell matched.
    pub fn unresolved(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.column(*field).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_case_insensitive_positions() {
        let schema = ResolvedSchema::resolve(&["Full Name", "RollNo", "Course"]);

        assert_eq!(schema.name, Some(0));
        assert_eq!(schema.roll_number, Some(1));
        assert_eq!(schema.course, Some(2));
        assert_eq!(schema.address, None);
        assert_eq!(schema.marksheet, None);
        assert_eq!(schema.notes, None);
    }

    #[test]
    fn test_roll_number_accepts_both_spellings() {
        let spaced = ResolvedSchema::resolve(&["Student", "Roll No."]);
        let joined = ResolvedSchema::resolve(&["Student", "ROLLNO"]);

        assert_eq!(spaced.roll_number, Some(1));
        assert_eq!(joined.roll_number, Some(1));
        assert_eq!(ResolvedSchema::resolve(&["Roll Number"]).roll_number, None);
    }

    #[test]
    fn test_first_matching_header_wins() {
        // "Course Name" also contains "name" and sits before "Student Name".
        let schema = ResolvedSchema::resolve(&["Course Name", "Student Name", "Course"]);

        assert_eq!(schema.name, Some(0));
        assert_eq!(schema.course, Some(0));
    }

    #[test]
    fn test_all_fields_resolved() {
        let header = [
            "Name",
            "Roll No",
            "Postal Address",
            "Marksheet Ready",
            "Notes",
            "Course",
        ];
        let schema = ResolvedSchema::resolve(&header);

        for (index, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(schema.column(field), Some(index), "{:?}", field);
        }
        assert!(schema.unresolved().is_empty());
    }

    #[test]
    fn test_empty_header_resolves_nothing() {
        let schema = ResolvedSchema::resolve::<&str>(&[]);
        assert_eq!(schema, ResolvedSchema::default());
        assert_eq!(schema.unresolved(), Field::ALL.to_vec());
    }

    #[test]
    fn test_cell_reads_substitute_empty() {
        let schema = ResolvedSchema::resolve(&["Name", "RollNo", "Course"]);
        let short_row = vec!["Alice".to_string()];

        assert_eq!(schema.cell(short_row.as_slice(), Field::Name), Some("Alice"));
        assert_eq!(schema.cell(short_row.as_slice(), Field::Course), None);
        assert_eq!(schema.text(short_row.as_slice(), Field::Course), "");
        // address never resolved
        assert_eq!(schema.text(short_row.as_slice(), Field::Address), "");
    }
}
