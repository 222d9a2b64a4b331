use crate::config::Config;
use crate::conversion;
use crate::finance::{depreciation, rent_vs_buy, roi};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 기간/요율 환산 오류
    Conversion(conversion::ConversionError),
    /// 렌트/구매 비교 계산 오류
    CostModel(rent_vs_buy::CostModelError),
    /// ROI 계산 오류
    Roi(roi::RoiError),
    /// 감가상각 계산 오류
    Depreciation(depreciation::DepreciationError),
    /// JSON 직렬화/역직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "환산 오류: {e}"),
            AppError::CostModel(e) => write!(f, "렌트/구매 비교 오류: {e}"),
            AppError::Roi(e) => write!(f, "ROI 계산 오류: {e}"),
            AppError::Depreciation(e) => write!(f, "감가상각 계산 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 처리 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<rent_vs_buy::CostModelError> for AppError {
    fn from(value: rent_vs_buy::CostModelError) -> Self {
        AppError::CostModel(value)
    }
}

impl From<roi::RoiError> for AppError {
    fn from(value: roi::RoiError) -> Self {
        AppError::Roi(value)
    }
}

impl From<depreciation::DepreciationError> for AppError {
    fn from(value: depreciation::DepreciationError) -> Self {
        AppError::Depreciation(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RentVsBuy => ui_cli::handle_rent_vs_buy(tr, config)?,
            MenuChoice::Roi => ui_cli::handle_roi(tr, config)?,
            MenuChoice::Depreciation => ui_cli::handle_depreciation(tr)?,
            MenuChoice::RateConversion => ui_cli::handle_rate_conversion(tr)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
