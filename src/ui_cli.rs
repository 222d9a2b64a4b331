use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog;
use crate::config::Config;
use crate::conversion;
use crate::finance::depreciation;
use crate::finance::rent_vs_buy::{self, CostModelInput, CostModelOutput, Recommendation};
use crate::finance::roi::{self, RoiInput};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{convert_rate, RateUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RentVsBuy,
    Roi,
    Depreciation,
    RateConversion,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RENT_VS_BUY));
    println!("{}", tr.t(keys::MAIN_MENU_ROI));
    println!("{}", tr.t(keys::MAIN_MENU_DEPRECIATION));
    println!("{}", tr.t(keys::MAIN_MENU_RATE_CONV));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RentVsBuy),
            "2" => return Ok(MenuChoice::Roi),
            "3" => return Ok(MenuChoice::Depreciation),
            "4" => return Ok(MenuChoice::RateConversion),
            "5" => return Ok(MenuChoice::Catalog),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 렌트 vs 구매 비교 메뉴를 처리한다.
pub fn handle_rent_vs_buy(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RVB_HEADING));
    println!("{}", tr.t(keys::HELP_RVB));

    let code = read_line(tr.t(keys::PROMPT_EQUIPMENT_CODE))?;
    let preset = match code.trim() {
        "" => None,
        c => {
            let found = catalog::find_equipment(c);
            match found {
                Some(eq) => println!("{} {} ({})", tr.t(keys::CATALOG_APPLIED), eq.name, eq.code),
                None => println!("{}", tr.t(keys::CATALOG_NOT_FOUND)),
            }
            found
        }
    };

    let assumptions = &cfg.assumptions;
    let purchase_price = read_f64_or(
        tr,
        keys::PROMPT_PURCHASE_PRICE,
        preset.map(|e| e.purchase_price).unwrap_or(0.0),
    )?;
    let hours_per_year = read_f64_or(
        tr,
        keys::PROMPT_HOURS_PER_YEAR,
        preset.map(|e| e.default_annual_hours).unwrap_or(0.0),
    )?;
    let years_of_ownership = read_u32_or(tr, keys::PROMPT_YEARS, 5)?;
    let operator_wage_hourly = read_f64_or(tr, keys::PROMPT_WAGE, assumptions.operator_wage_hourly)?;
    let maintenance_cost_per_hour = read_f64_or(
        tr,
        keys::PROMPT_MAINTENANCE,
        preset.map(|e| e.maintenance_per_hour).unwrap_or(0.0),
    )?;
    let rate_value = read_f64_or(
        tr,
        keys::PROMPT_RENTAL_RATE,
        preset.map(|e| e.monthly_rental_rate).unwrap_or(0.0),
    )?;
    let rate_unit = read_rate_unit(tr)?;
    let monthly_rental_rate = convert_rate(rate_value, rate_unit, RateUnit::PerMonth);
    let annual_interest_rate =
        read_f64_or(tr, keys::PROMPT_INTEREST, assumptions.annual_interest_rate)?;
    let tax_rate = read_f64_or(tr, keys::PROMPT_TAX, assumptions.tax_rate)?;

    let input = CostModelInput {
        purchase_price,
        hours_per_year,
        years_of_ownership,
        operator_wage_hourly,
        maintenance_cost_per_hour,
        monthly_rental_rate,
        annual_interest_rate,
        tax_rate,
        clamp_depreciation: assumptions.clamp_depreciation,
    };
    let output = rent_vs_buy::compute(&input)?;
    print_cost_output(tr, &output);

    let answer = read_line(tr.t(keys::PROMPT_PRINT_JSON))?;
    if answer.trim().eq_ignore_ascii_case("y") {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

/// 렌탈 ROI 메뉴를 처리한다.
pub fn handle_roi(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROI_HEADING));
    println!("{}", tr.t(keys::HELP_ROI));

    let code = read_line(tr.t(keys::PROMPT_EQUIPMENT_CODE))?;
    let preset = match code.trim() {
        "" => None,
        c => {
            let found = catalog::find_equipment(c);
            match found {
                Some(eq) => println!("{} {} ({})", tr.t(keys::CATALOG_APPLIED), eq.name, eq.code),
                None => println!("{}", tr.t(keys::CATALOG_NOT_FOUND)),
            }
            found
        }
    };

    let purchase_price = read_f64_or(
        tr,
        keys::PROMPT_PURCHASE_PRICE,
        preset.map(|e| e.purchase_price).unwrap_or(0.0),
    )?;
    let monthly_rental_rate = read_f64_or(
        tr,
        keys::PROMPT_RENTAL_RATE,
        preset.map(|e| e.monthly_rental_rate).unwrap_or(0.0),
    )?;
    let utilization_rate = read_f64_or(tr, keys::PROMPT_UTILIZATION, 0.6)?;
    // 참고 단가의 정비비를 월 환산한 값을 기본 지출로 제안한다.
    let default_cost = preset
        .map(|e| e.maintenance_per_hour * rent_vs_buy::RENTAL_MONTH_HOURS * utilization_rate)
        .unwrap_or(0.0);
    let monthly_operating_cost = read_f64_or(tr, keys::PROMPT_MONTHLY_COST, default_cost)?;

    let result = roi::compute_roi(&RoiInput {
        purchase_price,
        monthly_rental_rate,
        utilization_rate,
        monthly_operating_cost,
    })?;

    println!(
        "{} {:.0} 원/월",
        tr.t(keys::RESULT_EFFECTIVE_REVENUE),
        result.effective_monthly_revenue
    );
    println!(
        "{} {:.0} 원/월",
        tr.t(keys::RESULT_NET_INCOME),
        result.net_monthly_income
    );
    if result.payback_months.is_finite() {
        println!(
            "{} {:.1} 개월",
            tr.t(keys::RESULT_PAYBACK),
            result.payback_months
        );
    } else {
        println!("{}", tr.t(keys::RESULT_PAYBACK_NEVER));
    }
    println!(
        "{} {:.2} %",
        tr.t(keys::RESULT_ANNUAL_RETURN),
        result.annual_return_percent
    );
    if result.break_even_utilization.is_finite() {
        println!(
            "{} {:.1} %",
            tr.t(keys::RESULT_BREAK_EVEN),
            result.break_even_utilization * 100.0
        );
    }
    Ok(())
}

/// 감가상각 스케줄 메뉴를 처리한다.
pub fn handle_depreciation(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DEP_HEADING));
    println!("{}", tr.t(keys::HELP_DEP));
    let purchase_price = read_f64(tr, &format!("{}: ", tr.t(keys::PROMPT_PURCHASE_PRICE)))?;
    let years = read_u32_or(tr, keys::PROMPT_YEARS, 5)?;
    let answer = read_line(tr.t(keys::PROMPT_CLAMP))?;
    let clamp = answer.trim().eq_ignore_ascii_case("y");

    let schedule = depreciation::schedule(purchase_price, years, clamp)?;
    println!("{}", tr.t(keys::DEP_TABLE_HEADER));
    for entry in &schedule.entries {
        println!(
            "{:<8} {:>14.0} {:>16.0}",
            entry.year, entry.depreciation, entry.book_value
        );
    }
    println!(
        "{} {:.0} 원",
        tr.t(keys::DEP_TOTAL),
        schedule.total_depreciation
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::DEP_FINAL_BOOK),
        schedule.final_book_value
    );
    Ok(())
}

/// 기간/요율 환산 메뉴를 처리한다.
pub fn handle_rate_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RATE_HEADING));
    println!("{}", tr.t(keys::HELP_RATE));
    println!("{}", tr.t(keys::RATE_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::PROMPT_KIND))?;
        match sel.trim() {
            "1" => break QuantityKind::Duration,
            "2" => break QuantityKind::RentalRate,
            _ => println!("{}", tr.t(keys::RATE_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::RATE_RESULT), to_unit.trim());
    Ok(())
}

/// 장비 참고 단가 메뉴를 처리한다.
pub fn handle_catalog(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CAT_HEADING));
    println!("{}", tr.t(keys::CAT_COLUMNS));
    for eq in catalog::equipment() {
        println!(
            "{:<9} {:>14.0} {:>16.0} {:>14.0} {:>13.0}",
            eq.code,
            eq.purchase_price,
            eq.monthly_rental_rate,
            eq.maintenance_per_hour,
            eq.default_annual_hours
        );
        println!("          {} - {}", eq.name, eq.notes);
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANG_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if !sel.trim().is_empty() {
        let lang = match sel.trim() {
            "1" => Some("auto"),
            "2" => Some("ko-kr"),
            "3" => Some("en-us"),
            _ => {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                None
            }
        };
        if let Some(lang) = lang {
            cfg.language = lang.to_string();
            println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
            println!("{}", tr.t(keys::SETTINGS_RESTART_NOTE));
        }
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CLAMP_CURRENT),
        cfg.assumptions.clamp_depreciation
    );
    let answer = read_line(tr.t(keys::SETTINGS_CLAMP_PROMPT))?;
    match answer.trim() {
        "y" | "Y" => cfg.assumptions.clamp_depreciation = true,
        "n" | "N" => cfg.assumptions.clamp_depreciation = false,
        _ => {}
    }

    cfg.assumptions.annual_interest_rate = read_f64_or(
        tr,
        keys::PROMPT_INTEREST,
        cfg.assumptions.annual_interest_rate,
    )?;
    cfg.assumptions.tax_rate = read_f64_or(tr, keys::PROMPT_TAX, cfg.assumptions.tax_rate)?;
    cfg.assumptions.operator_wage_hourly =
        read_f64_or(tr, keys::PROMPT_WAGE, cfg.assumptions.operator_wage_hourly)?;
    Ok(())
}

fn print_cost_output(tr: &Translator, output: &CostModelOutput) {
    println!(
        "{} {:.1} %",
        tr.t(keys::RESULT_UTILIZATION),
        output.utilization_rate * 100.0
    );

    println!("{}", tr.t(keys::RESULT_BUY_HEADING));
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_OPERATOR_COST),
        output.buy.operator_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_MAINTENANCE_COST),
        output.buy.maintenance_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_INSURANCE_COST),
        output.buy.insurance_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_FINANCING_COST),
        output.buy.financing_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_DEPRECIATION),
        output.buy.total_depreciation
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_RESALE),
        output.buy.resale_value
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_TAX_SAVINGS),
        output.buy.tax_savings
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_BEFORE_TAX),
        output.buy.total_before_tax
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_AFTER_TAX),
        output.buy.total_after_tax
    );

    println!("{}", tr.t(keys::RESULT_RENT_HEADING));
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_RENTAL_MONTHS),
        output.rent.rental_months_per_year
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_RENTAL_COST),
        output.rent.rental_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_OPERATOR_COST),
        output.rent.operator_cost
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_TAX_SAVINGS),
        output.rent.tax_savings
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_BEFORE_TAX),
        output.rent.total_before_tax
    );
    println!(
        "{} {:.0} 원",
        tr.t(keys::RESULT_AFTER_TAX),
        output.rent.total_after_tax
    );

    println!("{} {:.0} 원", tr.t(keys::RESULT_SAVINGS), output.savings);
    println!(
        "{} {:.1} %",
        tr.t(keys::RESULT_SAVINGS_PERCENT),
        output.savings_percent
    );
    match output.recommendation {
        Recommendation::Rent => println!("{}", tr.t(keys::RESULT_RECOMMEND_RENT)),
        Recommendation::Buy => println!("{}", tr.t(keys::RESULT_RECOMMEND_BUY)),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 라벨 키와 기본값으로 프롬프트를 구성한다. 엔터 입력 시 기본값을 쓴다.
fn read_f64_or(tr: &Translator, label_key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!(
        "{} ({} {}): ",
        tr.t(label_key),
        tr.t(keys::PROMPT_DEFAULT_TAG),
        default
    );
    loop {
        let s = read_line(&prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, label_key: &str, default: u32) -> Result<u32, AppError> {
    let prompt = format!(
        "{} ({} {}): ",
        tr.t(label_key),
        tr.t(keys::PROMPT_DEFAULT_TAG),
        default
    );
    loop {
        let s = read_line(&prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_rate_unit(tr: &Translator) -> Result<RateUnit, AppError> {
    println!("{}", tr.t(keys::RATE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => RateUnit::PerWeek,
        "3" => RateUnit::PerDay,
        "4" => RateUnit::PerHour,
        _ => RateUnit::PerMonth,
    };
    Ok(unit)
}
