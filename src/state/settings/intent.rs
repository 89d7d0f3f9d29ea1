use crate::store::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsIntent {
    SetHost(Option<String>),
    SetProtocol(Option<String>),
}

impl Intent for SettingsIntent {}
