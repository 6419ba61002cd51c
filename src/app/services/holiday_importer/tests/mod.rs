//! Shared test utilities and fixtures for holiday importer tests

use crate::app::models::Scope;
use crate::app::services::dataset_locator::DatasetLocator;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;


pub const NATIONAL_CSV: &str = "DIA;MES;EVENTO
1;1;Confraternização Universal
21;4;Tiradentes
7;9;Independência do Brasil
25;12;Natal
";

pub const STATE_CSV: &str = "DIA;MES;UF;EVENTO
25;1;SP;Aniversário de São Paulo
23;4;rj;Dia de São Jorge
20;9;Rs ;Revolução Farroupilha
";

pub const MUNICIPAL_CSV: &str = "CODIGO_IBGE;CODIGO_FEDERAL;CODIGO_ESTADUAL;ESTADO;UF;CIDADE;DIA;MES
3550308;0;0;SP;SP;São Paulo;25;1
3304557;0;0;rj;RJ;Rio de Janeiro;1;3
2927408;0;0;BA;BA;Salvador;29;3
";

/// Locator serving datasets held in memory
#[derive(Debug, Default)]
pub struct InMemoryDatasets {
    datasets: HashMap<Scope, String>,
}

impl InMemoryDatasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, scope: Scope, text: &str) -> Self {
        self.datasets.insert(scope, text.to_string());
        self
    }

    /// All three scopes with the standard fixtures
    pub fn standard() -> Self {
        Self::new()
            .with(Scope::National, NATIONAL_CSV)
            .with(Scope::State, STATE_CSV)
            .with(Scope::Municipal, MUNICIPAL_CSV)
    }
}

impl DatasetLocator for InMemoryDatasets {
    fn open(&self, scope: Scope) -> Result<Box<dyn Read + '_>> {
        let text = self
            .datasets
            .get(&scope)
            .ok_or_else(|| Error::dataset_not_found(scope.as_str(), self.describe(scope)))?;
        Ok(Box::new(Cursor::new(text.as_bytes())))
    }

    fn describe(&self, scope: Scope) -> String {
        format!("memory:{}", scope.dataset_name())
    }
}

/// Write a dataset file for `scope` into `dir`
pub fn write_dataset(dir: &Path, scope: Scope, text: &str) -> std::io::Result<()> {
    fs::write(dir.join(scope.dataset_name()), text)
}
