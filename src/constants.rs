//! Application constants for the holiday importer
//!
//! This module contains dataset names, column layouts, default labels and
//! the sentinel values used throughout the import pipeline.

// =============================================================================
// Dataset Names and Layout
// =============================================================================

/// Directory (relative to the crate root) holding the embedded datasets
pub const ASSETS_DIR_NAME: &str = "assets";

/// Field delimiter used by every dataset
pub const FIELD_DELIMITER: u8 = b';';

/// Dataset file names per scope
pub mod datasets {
    pub const NATIONAL: &str = "FeriadosNacionaisBr.csv";
    pub const STATE: &str = "FeriadosEstaduaisBr.csv";
    pub const MUNICIPAL: &str = "FeriadosMunicipaisBr.csv";
}

/// Number of declared columns per scope
pub mod columns {
    /// DIA;MES;EVENTO
    pub const NATIONAL: usize = 3;

    /// DIA;MES;UF;EVENTO
    pub const STATE: usize = 4;

    /// CODIGO_IBGE;CODIGO_FEDERAL;CODIGO_ESTADUAL;ESTADO;UF;CIDADE;DIA;MES
    pub const MUNICIPAL: usize = 8;
}

/// Positional column indexes of the municipal dataset
pub mod municipal_columns {
    pub const IBGE_CODE: usize = 0;
    pub const FEDERAL_CODE: usize = 1;
    pub const STATE_HOLIDAY_CODE: usize = 2;
    pub const STATE_CODE: usize = 3;
    pub const UF_CODE: usize = 4;
    pub const CITY_NAME: usize = 5;
    pub const DAY: usize = 6;
    pub const MONTH: usize = 7;
}

// =============================================================================
// Record Defaults
// =============================================================================

/// Default coverage labels, as found in the reference data
pub mod coverage_labels {
    pub const NATIONAL: &str = "Nacional";
    pub const STATE: &str = "Estadual";
    pub const MUNICIPAL: &str = "Municipal";
}

/// Default country code for every record
pub const DEFAULT_COUNTRY_CODE: &str = "BR";

/// Prefix of the synthesized municipal holiday title
pub const MUNICIPAL_TITLE_PREFIX: &str = "Aniversário de ";

/// Years below this value mean "unspecified" and are replaced by the current year
pub const MIN_EXPLICIT_YEAR: i32 = 1900;
