//! Field coercion and row validation
//!
//! Maps the positional columns of each scope to named holiday fields. A row
//! with any empty declared column is dropped (`Ok(None)`); a day or month
//! that is not a base-10 integer is an error for that row.

use super::delimited_reader::RawRow;
use crate::app::models::Scope;
use crate::constants::{MUNICIPAL_TITLE_PREFIX, columns, municipal_columns};
use crate::{Error, Result};

/// Coerced fields of one accepted row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolidayFields {
    pub day: i32,
    pub month: i32,
    pub title: String,
    pub state_code: String,
    pub federal_code: String,
    pub ibge_code: String,
    pub city_name: String,
}

/// Row mapping strategy for one scope
pub type RowMapper = fn(&RawRow, &str) -> Result<Option<HolidayFields>>;

/// Row mapping strategy for `scope`
pub fn mapper_for(scope: Scope) -> RowMapper {
    match scope {
        Scope::National => map_national_row,
        Scope::State => map_state_row,
        Scope::Municipal => map_municipal_row,
    }
}

/// `DIA;MES;EVENTO`
pub fn map_national_row(row: &RawRow, dataset: &str) -> Result<Option<HolidayFields>> {
    let Some(fields) = trimmed_fields(row, columns::NATIONAL) else {
        return Ok(None);
    };

    Ok(Some(HolidayFields {
        day: parse_number(fields[0], "day", row, dataset)?,
        month: parse_number(fields[1], "month", row, dataset)?,
        title: fields[2].to_string(),
        ..HolidayFields::default()
    }))
}

/// `DIA;MES;UF;EVENTO`
pub fn map_state_row(row: &RawRow, dataset: &str) -> Result<Option<HolidayFields>> {
    let Some(fields) = trimmed_fields(row, columns::STATE) else {
        return Ok(None);
    };

    Ok(Some(HolidayFields {
        day: parse_number(fields[0], "day", row, dataset)?,
        month: parse_number(fields[1], "month", row, dataset)?,
        state_code: fields[2].to_uppercase(),
        title: fields[3].to_string(),
        ..HolidayFields::default()
    }))
}

/// `CODIGO_IBGE;CODIGO_FEDERAL;CODIGO_ESTADUAL;ESTADO;UF;CIDADE;DIA;MES`
///
/// The state holiday code and UF columns must be present but are not used;
/// the title is always synthesized from the city name.
pub fn map_municipal_row(row: &RawRow, dataset: &str) -> Result<Option<HolidayFields>> {
    let Some(fields) = trimmed_fields(row, columns::MUNICIPAL) else {
        return Ok(None);
    };

    let city_name = fields[municipal_columns::CITY_NAME];

    Ok(Some(HolidayFields {
        day: parse_number(fields[municipal_columns::DAY], "day", row, dataset)?,
        month: parse_number(fields[municipal_columns::MONTH], "month", row, dataset)?,
        title: municipal_title(city_name),
        state_code: fields[municipal_columns::STATE_CODE].to_uppercase(),
        federal_code: fields[municipal_columns::FEDERAL_CODE].to_string(),
        ibge_code: fields[municipal_columns::IBGE_CODE].to_string(),
        city_name: city_name.to_string(),
    }))
}

/// Title of a city's anniversary holiday
pub fn municipal_title(city_name: &str) -> String {
    format!("{}{}", MUNICIPAL_TITLE_PREFIX, city_name)
}

/// Trimmed first `count` fields, or None if any of them is empty
fn trimmed_fields(row: &RawRow, count: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = row.fields.iter().take(count).map(|f| f.trim()).collect();
    if fields.len() < count || fields.iter().any(|f| f.is_empty()) {
        return None;
    }
    Some(fields)
}

fn parse_number(value: &str, field_name: &str, row: &RawRow, dataset: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|e| {
        Error::malformed_row(
            dataset,
            row.line,
            format!("invalid {} '{}' ({})", field_name, value, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> RawRow {
        RawRow {
            line: 2,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_national_row() {
        let fields = map_national_row(&row(&["7", "9", "Independência do Brasil"]), "n.csv")
            .unwrap()
            .unwrap();
        assert_eq!(fields.day, 7);
        assert_eq!(fields.month, 9);
        assert_eq!(fields.title, "Independência do Brasil");
        assert!(fields.state_code.is_empty());
        assert!(fields.city_name.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let fields = map_national_row(&row(&[" 25 ", "\t12", "  Natal  "]), "n.csv")
            .unwrap()
            .unwrap();
        assert_eq!((fields.day, fields.month), (25, 12));
        assert_eq!(fields.title, "Natal");
    }

    #[test]
    fn test_empty_column_drops_row() {
        assert_eq!(map_national_row(&row(&["25", "12", "   "]), "n.csv").unwrap(), None);
        assert_eq!(map_national_row(&row(&["", "12", "Natal"]), "n.csv").unwrap(), None);
        assert_eq!(
            map_state_row(&row(&["9", "7", "", "Revolução"]), "s.csv").unwrap(),
            None
        );
    }

    #[test]
    fn test_state_code_upper_cased() {
        let fields = map_state_row(&row(&["25", "1", " sp ", "Aniversário de São Paulo"]), "s.csv")
            .unwrap()
            .unwrap();
        assert_eq!(fields.state_code, "SP");
        assert_eq!(fields.title, "Aniversário de São Paulo");
        assert_eq!((fields.day, fields.month), (25, 1));
    }

    #[test]
    fn test_municipal_row() {
        let fields = map_municipal_row(
            &row(&["3550308", "0", "0", "sp", "SP", "São Paulo", "25", "1"]),
            "m.csv",
        )
        .unwrap()
        .unwrap();
        assert_eq!(fields.city_name, "São Paulo");
        assert_eq!(fields.title, "Aniversário de São Paulo");
        assert_eq!(fields.state_code, "SP");
        assert_eq!(fields.ibge_code, "3550308");
        assert_eq!(fields.federal_code, "0");
        assert_eq!((fields.day, fields.month), (25, 1));
    }

    #[test]
    fn test_municipal_requires_every_column() {
        // Unused UF column still has to be present
        let result = map_municipal_row(
            &row(&["3550308", "0", "0", "SP", "", "São Paulo", "25", "1"]),
            "m.csv",
        )
        .unwrap();
        assert_eq!(result, None);

        let result = map_municipal_row(
            &row(&["3550308", "0", "0", "SP", "SP", " ", "25", "1"]),
            "m.csv",
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_invalid_number_is_row_error() {
        let result = map_national_row(&row(&["sete", "9", "Independência"]), "n.csv");
        match result {
            Err(Error::MalformedRow { dataset, line, message }) => {
                assert_eq!(dataset, "n.csv");
                assert_eq!(line, 2);
                assert!(message.contains("invalid day 'sete'"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }

        assert!(map_state_row(&row(&["9", "7.5", "SP", "Revolução"]), "s.csv").is_err());
    }

    #[test]
    fn test_signed_numbers_parse() {
        let fields = map_national_row(&row(&["+7", "-9", "Teste"]), "n.csv")
            .unwrap()
            .unwrap();
        assert_eq!((fields.day, fields.month), (7, -9));
    }

    #[test]
    fn test_mapper_for_dispatches_by_scope() {
        let municipal = row(&["3550308", "0", "0", "SP", "SP", "São Paulo", "25", "1"]);
        let fields = mapper_for(Scope::Municipal)(&municipal, "m.csv")
            .unwrap()
            .unwrap();
        assert_eq!(fields.title, municipal_title("São Paulo"));

        let national = row(&["1", "1", "Confraternização Universal"]);
        assert!(mapper_for(Scope::National)(&national, "n.csv").unwrap().is_some());
        assert!(mapper_for(Scope::State)(&national, "s.csv").unwrap().is_none());
    }
}
