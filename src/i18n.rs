use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RENT_VS_BUY: &str = "main_menu.rent_vs_buy";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_DEPRECIATION: &str = "main_menu.depreciation";
    pub const MAIN_MENU_RATE_CONV: &str = "main_menu.rate_conv";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const PROMPT_DEFAULT_TAG: &str = "prompt.default_tag";

    pub const RVB_HEADING: &str = "rent_vs_buy.heading";
    pub const HELP_RVB: &str = "help.rent_vs_buy";
    pub const PROMPT_EQUIPMENT_CODE: &str = "prompt.equipment_code";
    pub const CATALOG_APPLIED: &str = "catalog.applied";
    pub const CATALOG_NOT_FOUND: &str = "catalog.not_found";
    pub const PROMPT_PURCHASE_PRICE: &str = "prompt.purchase_price";
    pub const PROMPT_HOURS_PER_YEAR: &str = "prompt.hours_per_year";
    pub const PROMPT_YEARS: &str = "prompt.years";
    pub const PROMPT_WAGE: &str = "prompt.wage";
    pub const PROMPT_MAINTENANCE: &str = "prompt.maintenance";
    pub const PROMPT_RENTAL_RATE: &str = "prompt.rental_rate";
    pub const RATE_UNIT_OPTIONS: &str = "unit.rate_options";
    pub const PROMPT_INTEREST: &str = "prompt.interest";
    pub const PROMPT_TAX: &str = "prompt.tax";
    pub const PROMPT_PRINT_JSON: &str = "prompt.print_json";

    pub const RESULT_UTILIZATION: &str = "result.utilization";
    pub const RESULT_BUY_HEADING: &str = "result.buy_heading";
    pub const RESULT_RENT_HEADING: &str = "result.rent_heading";
    pub const RESULT_OPERATOR_COST: &str = "result.operator_cost";
    pub const RESULT_MAINTENANCE_COST: &str = "result.maintenance_cost";
    pub const RESULT_INSURANCE_COST: &str = "result.insurance_cost";
    pub const RESULT_FINANCING_COST: &str = "result.financing_cost";
    pub const RESULT_DEPRECIATION: &str = "result.depreciation";
    pub const RESULT_RESALE: &str = "result.resale";
    pub const RESULT_TAX_SAVINGS: &str = "result.tax_savings";
    pub const RESULT_BEFORE_TAX: &str = "result.before_tax";
    pub const RESULT_AFTER_TAX: &str = "result.after_tax";
    pub const RESULT_RENTAL_MONTHS: &str = "result.rental_months";
    pub const RESULT_RENTAL_COST: &str = "result.rental_cost";
    pub const RESULT_SAVINGS: &str = "result.savings";
    pub const RESULT_SAVINGS_PERCENT: &str = "result.savings_percent";
    pub const RESULT_RECOMMEND_RENT: &str = "result.recommend_rent";
    pub const RESULT_RECOMMEND_BUY: &str = "result.recommend_buy";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const HELP_ROI: &str = "help.roi";
    pub const PROMPT_UTILIZATION: &str = "prompt.utilization";
    pub const PROMPT_MONTHLY_COST: &str = "prompt.monthly_cost";
    pub const RESULT_EFFECTIVE_REVENUE: &str = "result.effective_revenue";
    pub const RESULT_NET_INCOME: &str = "result.net_income";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PAYBACK_NEVER: &str = "result.payback_never";
    pub const RESULT_ANNUAL_RETURN: &str = "result.annual_return";
    pub const RESULT_BREAK_EVEN: &str = "result.break_even";

    pub const DEP_HEADING: &str = "depreciation.heading";
    pub const HELP_DEP: &str = "help.depreciation";
    pub const PROMPT_CLAMP: &str = "prompt.clamp";
    pub const DEP_TABLE_HEADER: &str = "depreciation.table_header";
    pub const DEP_TOTAL: &str = "depreciation.total";
    pub const DEP_FINAL_BOOK: &str = "depreciation.final_book";

    pub const RATE_HEADING: &str = "rate_conv.heading";
    pub const HELP_RATE: &str = "help.rate_conv";
    pub const RATE_OPTIONS: &str = "rate_conv.options";
    pub const PROMPT_KIND: &str = "prompt.kind";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const RATE_RESULT: &str = "rate_conv.result";
    pub const RATE_UNSUPPORTED: &str = "rate_conv.unsupported";

    pub const CAT_HEADING: &str = "catalog.heading";
    pub const CAT_COLUMNS: &str = "catalog.columns";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANG_OPTIONS: &str = "settings.lang_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_RESTART_NOTE: &str = "settings.restart_note";
    pub const SETTINGS_CLAMP_CURRENT: &str = "settings.clamp_current";
    pub const SETTINGS_CLAMP_PROMPT: &str = "settings.clamp_prompt";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko-kr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Rental Decision Toolbox ===",
        MAIN_MENU_RENT_VS_BUY => "1) 렌트 vs 구매 비교",
        MAIN_MENU_ROI => "2) 렌탈 ROI 계산",
        MAIN_MENU_DEPRECIATION => "3) 감가상각 스케줄",
        MAIN_MENU_RATE_CONV => "4) 기간/요율 환산",
        MAIN_MENU_CATALOG => "5) 장비 참고 단가",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_DEFAULT_TAG => "기본",
        RVB_HEADING => "\n-- 렌트 vs 구매 비교 --",
        HELP_RVB => "도움말: 비교는 세후 총소유비용 기준입니다. 렌탈료는 월/주/일/시간 단위로 입력할 수 있습니다.",
        PROMPT_EQUIPMENT_CODE => "장비 코드(직접 입력은 엔터): ",
        CATALOG_APPLIED => "참고 단가를 불러왔습니다:",
        CATALOG_NOT_FOUND => "해당 코드의 장비가 없습니다. 직접 입력으로 진행합니다.",
        PROMPT_PURCHASE_PRICE => "구매 가격 [원]",
        PROMPT_HOURS_PER_YEAR => "연간 가동 시간 [h] (0~2080)",
        PROMPT_YEARS => "비교 기간 [년]",
        PROMPT_WAGE => "운전원 시급 [원/h]",
        PROMPT_MAINTENANCE => "시간당 정비비 [원/h]",
        PROMPT_RENTAL_RATE => "렌탈료 [원]",
        RATE_UNIT_OPTIONS => "요율 단위: 1=월 2=주 3=일 4=시간",
        PROMPT_INTEREST => "연이율 (0~1, 0=현금 구매)",
        PROMPT_TAX => "유효 세율 (0~1)",
        PROMPT_PRINT_JSON => "JSON으로도 출력할까요? (y/N): ",
        RESULT_UTILIZATION => "가동률:",
        RESULT_BUY_HEADING => "[구매 시나리오]",
        RESULT_RENT_HEADING => "[렌탈 시나리오]",
        RESULT_OPERATOR_COST => "운전원 인건비:",
        RESULT_MAINTENANCE_COST => "정비비:",
        RESULT_INSURANCE_COST => "보험료:",
        RESULT_FINANCING_COST => "금융비용:",
        RESULT_DEPRECIATION => "누적 감가상각:",
        RESULT_RESALE => "잔존가치:",
        RESULT_TAX_SAVINGS => "절세 효과:",
        RESULT_BEFORE_TAX => "세전 총비용:",
        RESULT_AFTER_TAX => "세후 총비용:",
        RESULT_RENTAL_MONTHS => "연간 청구 개월:",
        RESULT_RENTAL_COST => "렌탈료 총액:",
        RESULT_SAVINGS => "세후 차액(구매-렌탈):",
        RESULT_SAVINGS_PERCENT => "절감률:",
        RESULT_RECOMMEND_RENT => "권고: 렌탈이 유리합니다.",
        RESULT_RECOMMEND_BUY => "권고: 구매가 유리합니다.",
        ROI_HEADING => "\n-- 렌탈 ROI 계산 --",
        HELP_ROI => "도움말: 명목 월 렌탈료에 기대 가동률을 곱한 실효 매출로 회수기간/수익률을 계산합니다.",
        PROMPT_UTILIZATION => "기대 가동률 (0~1)",
        PROMPT_MONTHLY_COST => "월 고정 지출 [원/월]",
        RESULT_EFFECTIVE_REVENUE => "실효 월 매출:",
        RESULT_NET_INCOME => "월 순수익:",
        RESULT_PAYBACK => "단순 회수기간:",
        RESULT_PAYBACK_NEVER => "단순 회수기간: 현재 조건으로는 회수 불가",
        RESULT_ANNUAL_RETURN => "연환산 수익률:",
        RESULT_BREAK_EVEN => "손익분기 가동률:",
        DEP_HEADING => "\n-- 감가상각 스케줄 --",
        HELP_DEP => "도움말: 1차 연도 20%, 이후 연 12% 정률(취득가 기준)입니다.",
        PROMPT_CLAMP => "장부가를 0 미만으로 내리지 않도록 제한할까요? (y/N): ",
        DEP_TABLE_HEADER => "연차      상각액 [원]      장부가 [원]",
        DEP_TOTAL => "누적 상각액:",
        DEP_FINAL_BOOK => "최종 장부가:",
        RATE_HEADING => "\n-- 기간/요율 환산 --",
        HELP_RATE => "도움말: 청구 기준 1일=8h, 1주=40h, 1개월=176h로 환산합니다.",
        RATE_OPTIONS => "1) 기간  2) 요율",
        PROMPT_KIND => "항목 번호를 입력: ",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위(ex: h, d, w, mo): ",
        PROMPT_TO_UNIT => "변환 단위(ex: h, d, w, mo): ",
        RATE_RESULT => "변환 결과:",
        RATE_UNSUPPORTED => "지원하지 않는 번호입니다.",
        CAT_HEADING => "\n-- 장비 참고 단가 --",
        CAT_COLUMNS => "코드      구매가 [원]      월 렌탈료 [원]   정비비 [원/h]   연간 가동 [h]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANG_OPTIONS => "1) auto  2) ko-kr  3) en-us",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        SETTINGS_RESTART_NOTE => "다음 실행부터 적용됩니다.",
        SETTINGS_CLAMP_CURRENT => "감가상각 제한 기본값:",
        SETTINGS_CLAMP_PROMPT => "감가상각을 구매가 이내로 제한할까요? (y/n, 엔터=유지): ",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Rental Decision Toolbox ===",
        MAIN_MENU_RENT_VS_BUY => "1) Rent vs Buy comparison",
        MAIN_MENU_ROI => "2) Rental ROI",
        MAIN_MENU_DEPRECIATION => "3) Depreciation schedule",
        MAIN_MENU_RATE_CONV => "4) Period/rate conversion",
        MAIN_MENU_CATALOG => "5) Equipment reference prices",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_DEFAULT_TAG => "default",
        RVB_HEADING => "\n-- Rent vs Buy --",
        HELP_RVB => "Help: the comparison uses after-tax total cost of ownership. Rental rates accept monthly/weekly/daily/hourly entry.",
        PROMPT_EQUIPMENT_CODE => "Equipment code (enter for manual input): ",
        CATALOG_APPLIED => "Reference prices loaded:",
        CATALOG_NOT_FOUND => "No equipment with that code; continuing with manual input.",
        PROMPT_PURCHASE_PRICE => "Purchase price [KRW]",
        PROMPT_HOURS_PER_YEAR => "Usage hours per year [h] (0-2080)",
        PROMPT_YEARS => "Ownership horizon [years]",
        PROMPT_WAGE => "Operator wage [KRW/h]",
        PROMPT_MAINTENANCE => "Maintenance cost [KRW/h]",
        PROMPT_RENTAL_RATE => "Rental rate [KRW]",
        RATE_UNIT_OPTIONS => "Rate unit: 1=monthly 2=weekly 3=daily 4=hourly",
        PROMPT_INTEREST => "Annual interest rate (0-1, 0=cash purchase)",
        PROMPT_TAX => "Effective tax rate (0-1)",
        PROMPT_PRINT_JSON => "Also print as JSON? (y/N): ",
        RESULT_UTILIZATION => "Utilization:",
        RESULT_BUY_HEADING => "[Buy scenario]",
        RESULT_RENT_HEADING => "[Rent scenario]",
        RESULT_OPERATOR_COST => "Operator cost:",
        RESULT_MAINTENANCE_COST => "Maintenance:",
        RESULT_INSURANCE_COST => "Insurance:",
        RESULT_FINANCING_COST => "Financing cost:",
        RESULT_DEPRECIATION => "Total depreciation:",
        RESULT_RESALE => "Resale value:",
        RESULT_TAX_SAVINGS => "Tax savings:",
        RESULT_BEFORE_TAX => "Total before tax:",
        RESULT_AFTER_TAX => "Total after tax:",
        RESULT_RENTAL_MONTHS => "Billed months per year:",
        RESULT_RENTAL_COST => "Rental cost:",
        RESULT_SAVINGS => "After-tax difference (buy-rent):",
        RESULT_SAVINGS_PERCENT => "Savings:",
        RESULT_RECOMMEND_RENT => "Recommendation: renting is cheaper.",
        RESULT_RECOMMEND_BUY => "Recommendation: buying is cheaper.",
        ROI_HEADING => "\n-- Rental ROI --",
        HELP_ROI => "Help: payback/return are computed from the nameplate monthly rate scaled by expected utilization.",
        PROMPT_UTILIZATION => "Expected utilization (0-1)",
        PROMPT_MONTHLY_COST => "Monthly operating cost [KRW/month]",
        RESULT_EFFECTIVE_REVENUE => "Effective monthly revenue:",
        RESULT_NET_INCOME => "Net monthly income:",
        RESULT_PAYBACK => "Simple payback:",
        RESULT_PAYBACK_NEVER => "Simple payback: not recoverable under current terms",
        RESULT_ANNUAL_RETURN => "Annualized return:",
        RESULT_BREAK_EVEN => "Break-even utilization:",
        DEP_HEADING => "\n-- Depreciation schedule --",
        HELP_DEP => "Help: 20% in year 1, then 12% per year, straight percentages of acquisition price.",
        PROMPT_CLAMP => "Keep book value from going below zero? (y/N): ",
        DEP_TABLE_HEADER => "Year      Depreciation [KRW]  Book value [KRW]",
        DEP_TOTAL => "Total depreciation:",
        DEP_FINAL_BOOK => "Final book value:",
        RATE_HEADING => "\n-- Period/rate conversion --",
        HELP_RATE => "Help: billing basis 1 day = 8 h, 1 week = 40 h, 1 month = 176 h.",
        RATE_OPTIONS => "1) Duration  2) Rental rate",
        PROMPT_KIND => "Enter item number: ",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit (ex: h, d, w, mo): ",
        PROMPT_TO_UNIT => "To unit (ex: h, d, w, mo): ",
        RATE_RESULT => "Result:",
        RATE_UNSUPPORTED => "Unsupported selection.",
        CAT_HEADING => "\n-- Equipment reference prices --",
        CAT_COLUMNS => "Code      Price [KRW]      Monthly [KRW]    Maint [KRW/h]   Annual [h]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANG_OPTIONS => "1) auto  2) ko-kr  3) en-us",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        SETTINGS_RESTART_NOTE => "Takes effect from the next run.",
        SETTINGS_CLAMP_CURRENT => "Depreciation clamp default:",
        SETTINGS_CLAMP_PROMPT => "Clamp cumulative depreciation to the purchase price? (y/n, enter=keep): ",
        _ => return None,
    })
}
