#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use rental_decision_toolbox::{
    catalog, config,
    conversion,
    finance::depreciation::{self, DepreciationSchedule},
    finance::rent_vs_buy::{self, CostModelInput, CostModelOutput, Recommendation},
    finance::roi::{self, RoiInput},
    i18n,
    quantity::QuantityKind,
    units::{convert_rate, RateUnit},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Rental Decision Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    RentVsBuy,
    Roi,
    Depreciation,
    RateConv,
    Catalog,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    ui_scale: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    apply_initial_view_size: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 렌트 vs 구매
    rvb_preset: String,
    rvb_price: f64,
    rvb_hours: f64,
    rvb_years: u32,
    rvb_wage: f64,
    rvb_maint: f64,
    rvb_rate_value: f64,
    rvb_rate_unit: RateUnit,
    rvb_interest_pct: f64,
    rvb_tax_pct: f64,
    rvb_clamp: bool,
    rvb_result: Option<String>,
    rvb_output: Option<CostModelOutput>,
    rvb_save_status: Option<String>,
    // ROI
    roi_price: f64,
    roi_rate: f64,
    roi_util_pct: f64,
    roi_cost: f64,
    roi_result: Option<String>,
    // 감가상각
    dep_price: f64,
    dep_years: u32,
    dep_clamp: bool,
    dep_schedule: Option<DepreciationSchedule>,
    dep_error: Option<String>,
    // 기간/요율 환산
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let assumptions = config.assumptions.clone();
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::RentVsBuy,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: 1.0,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            apply_initial_view_size: true,
            custom_font_path: String::new(),
            font_load_error: None,
            rvb_preset: String::new(),
            rvb_price: 150_000_000.0,
            rvb_hours: 800.0,
            rvb_years: 5,
            rvb_wage: assumptions.operator_wage_hourly,
            rvb_maint: 15_000.0,
            rvb_rate_value: 9_000_000.0,
            rvb_rate_unit: RateUnit::PerMonth,
            rvb_interest_pct: assumptions.annual_interest_rate * 100.0,
            rvb_tax_pct: assumptions.tax_rate * 100.0,
            rvb_clamp: assumptions.clamp_depreciation,
            rvb_result: None,
            rvb_output: None,
            rvb_save_status: None,
            roi_price: 60_000_000.0,
            roi_rate: 3_200_000.0,
            roi_util_pct: 60.0,
            roi_cost: 900_000.0,
            roi_result: None,
            dep_price: 150_000_000.0,
            dep_years: 5,
            dep_clamp: assumptions.clamp_depreciation,
            dep_schedule: None,
            dep_error: None,
            conv_kind: QuantityKind::RentalRate,
            conv_value: 9_000_000.0,
            conv_from: "mo".into(),
            conv_to: "d".into(),
            conv_result: None,
        }
    }

    fn apply_preset(&mut self, code: &str) {
        if let Some(eq) = catalog::find_equipment(code) {
            self.rvb_price = eq.purchase_price;
            self.rvb_hours = eq.default_annual_hours;
            self.rvb_maint = eq.maintenance_per_hour;
            self.rvb_rate_value = eq.monthly_rental_rate;
            self.rvb_rate_unit = RateUnit::PerMonth;
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::RentVsBuy, txt("gui.tab.rent_vs_buy", "Rent vs Buy")),
            (Tab::Roi, txt("gui.tab.roi", "Rental ROI")),
            (Tab::Depreciation, txt("gui.tab.depreciation", "Depreciation")),
            (Tab::RateConv, txt("gui.tab.rate_conv", "Period/rate")),
            (Tab::Catalog, txt("gui.tab.catalog", "Reference prices")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_rent_vs_buy(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.rvb.heading", "Rent vs Buy"),
            &txt(
                "gui.rvb.tip",
                "Compares renting against buying on after-tax total cost of ownership.",
            ),
        );
        ui.add_space(8.0);
        let mut preset_changed: Option<String> = None;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("rvb_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.rvb.preset", "Equipment preset"));
                    let selected_label = catalog::find_equipment(&self.rvb_preset)
                        .map(|e| format!("{} ({})", e.name, e.code))
                        .unwrap_or_else(|| txt("gui.rvb.preset_manual", "Manual input"));
                    egui::ComboBox::from_id_source("rvb_preset")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_label(
                                    self.rvb_preset.is_empty(),
                                    txt("gui.rvb.preset_manual", "Manual input"),
                                )
                                .clicked()
                            {
                                self.rvb_preset.clear();
                            }
                            for eq in catalog::equipment() {
                                let label = format!("{} ({})", eq.name, eq.code);
                                if ui
                                    .selectable_label(self.rvb_preset == eq.code, label)
                                    .clicked()
                                {
                                    self.rvb_preset = eq.code.to_string();
                                    preset_changed = Some(eq.code.to_string());
                                }
                            }
                        });
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.rvb.price", "Purchase price [KRW]"),
                        &txt("gui.rvb.price_tip", "Basis for depreciation, insurance and financing."),
                    );
                    ui.add(egui::DragValue::new(&mut self.rvb_price).speed(100_000.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.rvb.hours", "Usage hours per year [h]"),
                        &txt("gui.rvb.hours_tip", "2080 h equals one standard work year."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.rvb_hours)
                            .speed(10.0)
                            .clamp_range(0.0..=rent_vs_buy::STANDARD_WORK_HOURS_PER_YEAR),
                    );
                    ui.end_row();

                    ui.label(txt("gui.rvb.years", "Ownership horizon [years]"));
                    ui.add(egui::DragValue::new(&mut self.rvb_years).clamp_range(1..=50));
                    ui.end_row();

                    ui.label(txt("gui.rvb.wage", "Operator wage [KRW/h]"));
                    ui.add(egui::DragValue::new(&mut self.rvb_wage).speed(1000.0));
                    ui.end_row();

                    ui.label(txt("gui.rvb.maintenance", "Maintenance cost [KRW/h]"));
                    ui.add(egui::DragValue::new(&mut self.rvb_maint).speed(1000.0));
                    ui.end_row();

                    ui.label(txt("gui.rvb.rate", "Rental rate"));
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.rvb_rate_value).speed(100_000.0));
                        egui::ComboBox::from_id_source("rvb_rate_unit")
                            .selected_text(rate_unit_label(self.rvb_rate_unit))
                            .show_ui(ui, |ui| {
                                for unit in [
                                    RateUnit::PerMonth,
                                    RateUnit::PerWeek,
                                    RateUnit::PerDay,
                                    RateUnit::PerHour,
                                ] {
                                    ui.selectable_value(
                                        &mut self.rvb_rate_unit,
                                        unit,
                                        rate_unit_label(unit),
                                    );
                                }
                            });
                    });
                    ui.end_row();

                    ui.label(txt("gui.rvb.interest", "Annual interest [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.rvb_interest_pct)
                            .speed(0.1)
                            .clamp_range(0.0..=99.0)
                            .suffix(" %"),
                    );
                    ui.end_row();

                    ui.label(txt("gui.rvb.tax", "Effective tax rate [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.rvb_tax_pct)
                            .speed(0.1)
                            .clamp_range(0.0..=99.0)
                            .suffix(" %"),
                    );
                    ui.end_row();
                });
            ui.checkbox(
                &mut self.rvb_clamp,
                txt("gui.rvb.clamp", "Clamp depreciation to purchase price"),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(txt("gui.rvb.run", "Compare")).clicked() {
                    self.run_rent_vs_buy(&txt);
                }
                if self.rvb_output.is_some()
                    && ui.button(txt("gui.rvb.save_report", "Save result (JSON)...")).clicked()
                {
                    self.save_rvb_report(&txt);
                }
            });
            if let Some(status) = &self.rvb_save_status {
                ui.label(status);
            }
            if let Some(res) = &self.rvb_result {
                ui.separator();
                ui.label(res);
            }
        });
        if let Some(code) = preset_changed {
            self.apply_preset(&code);
        }
    }

    fn run_rent_vs_buy<F>(&mut self, txt: &F)
    where
        F: Fn(&str, &str) -> String,
    {
        let input = CostModelInput {
            purchase_price: self.rvb_price,
            hours_per_year: self.rvb_hours,
            years_of_ownership: self.rvb_years,
            operator_wage_hourly: self.rvb_wage,
            maintenance_cost_per_hour: self.rvb_maint,
            monthly_rental_rate: convert_rate(
                self.rvb_rate_value,
                self.rvb_rate_unit,
                RateUnit::PerMonth,
            ),
            annual_interest_rate: self.rvb_interest_pct / 100.0,
            tax_rate: self.rvb_tax_pct / 100.0,
            clamp_depreciation: self.rvb_clamp,
        };
        self.rvb_save_status = None;
        match rent_vs_buy::compute(&input) {
            Ok(output) => {
                self.rvb_result = Some(format_cost_output(txt, &output));
                self.rvb_output = Some(output);
            }
            Err(e) => {
                self.rvb_result = Some(format!("{}: {e}", txt("gui.rate.error_prefix", "Error")));
                self.rvb_output = None;
            }
        }
    }

    fn save_rvb_report<F>(&mut self, txt: &F)
    where
        F: Fn(&str, &str) -> String,
    {
        let Some(output) = &self.rvb_output else {
            return;
        };
        let picked = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("rent_vs_buy.json")
            .save_file();
        if let Some(path) = picked {
            let result = serde_json::to_string_pretty(output)
                .map_err(|e| e.to_string())
                .and_then(|json| fs::write(&path, json).map_err(|e| e.to_string()));
            self.rvb_save_status = Some(match result {
                Ok(()) => format!("{} {}", txt("gui.rvb.save_done", "Saved:"), path.display()),
                Err(e) => format!("{} {e}", txt("gui.rvb.save_error", "Save failed:")),
            });
        }
    }

    fn ui_roi(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.roi.heading", "Rental ROI"),
            &txt(
                "gui.roi.tip",
                "Payback and return from utilization-adjusted effective revenue.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("roi_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.roi.price", "Purchase price [KRW]"));
                    ui.add(egui::DragValue::new(&mut self.roi_price).speed(100_000.0));
                    ui.end_row();

                    ui.label(txt("gui.roi.rate", "Nameplate monthly rate [KRW/month]"));
                    ui.add(egui::DragValue::new(&mut self.roi_rate).speed(100_000.0));
                    ui.end_row();

                    ui.label(txt("gui.roi.utilization", "Expected utilization [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.roi_util_pct)
                            .speed(1.0)
                            .clamp_range(0.0..=100.0)
                            .suffix(" %"),
                    );
                    ui.end_row();

                    ui.label(txt("gui.roi.cost", "Monthly operating cost [KRW/month]"));
                    ui.add(egui::DragValue::new(&mut self.roi_cost).speed(10_000.0));
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.roi.run", "Compute")).clicked() {
                let input = RoiInput {
                    purchase_price: self.roi_price,
                    monthly_rental_rate: self.roi_rate,
                    utilization_rate: self.roi_util_pct / 100.0,
                    monthly_operating_cost: self.roi_cost,
                };
                self.roi_result = Some(match roi::compute_roi(&input) {
                    Ok(r) => {
                        let payback = if r.payback_months.is_finite() {
                            format!("{:.1} 개월", r.payback_months)
                        } else {
                            txt("gui.roi.payback_never", "Not recoverable under current terms")
                        };
                        let break_even = if r.break_even_utilization.is_finite() {
                            format!("{:.1} %", r.break_even_utilization * 100.0)
                        } else {
                            "-".to_string()
                        };
                        format!(
                            "{:.0} 원/월 → {:.0} 원/월\n{payback} / {:.2} % / {break_even}",
                            r.effective_monthly_revenue,
                            r.net_monthly_income,
                            r.annual_return_percent
                        )
                    }
                    Err(e) => format!("{}: {e}", txt("gui.rate.error_prefix", "Error")),
                });
            }
            if let Some(res) = &self.roi_result {
                ui.label(res);
            }
        });
    }

    fn ui_depreciation(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.dep.heading", "Depreciation schedule"),
            &txt(
                "gui.dep.tip",
                "20% in year 1, then 12% per year, straight percentages of acquisition price.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("dep_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.dep.price", "Acquisition price [KRW]"));
                    ui.add(egui::DragValue::new(&mut self.dep_price).speed(100_000.0));
                    ui.end_row();

                    ui.label(txt("gui.dep.years", "Schedule length [years]"));
                    ui.add(egui::DragValue::new(&mut self.dep_years).clamp_range(1..=50));
                    ui.end_row();
                });
            ui.checkbox(
                &mut self.dep_clamp,
                txt("gui.dep.clamp", "Floor book value at zero"),
            );
            ui.add_space(8.0);
            if ui.button(txt("gui.dep.run", "Build schedule")).clicked() {
                match depreciation::schedule(self.dep_price, self.dep_years, self.dep_clamp) {
                    Ok(schedule) => {
                        self.dep_schedule = Some(schedule);
                        self.dep_error = None;
                    }
                    Err(e) => {
                        self.dep_schedule = None;
                        self.dep_error =
                            Some(format!("{}: {e}", txt("gui.rate.error_prefix", "Error")));
                    }
                }
            }
            if let Some(err) = &self.dep_error {
                ui.label(err);
            }
            if let Some(schedule) = &self.dep_schedule {
                ui.separator();
                egui::Grid::new("dep_table")
                    .num_columns(3)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong(txt("gui.dep.col_year", "Year"));
                        ui.strong(txt("gui.dep.col_depreciation", "Depreciation [KRW]"));
                        ui.strong(txt("gui.dep.col_book", "Book value [KRW]"));
                        ui.end_row();
                        for entry in &schedule.entries {
                            ui.label(format!("{}", entry.year));
                            ui.label(format!("{:.0}", entry.depreciation));
                            ui.label(format!("{:.0}", entry.book_value));
                            ui.end_row();
                        }
                    });
                ui.label(format!(
                    "{}: {:.0} / {}: {:.0}",
                    txt("gui.dep.total", "Total depreciation"),
                    schedule.total_depreciation,
                    txt("gui.dep.final_book", "Final book value"),
                    schedule.final_book_value
                ));
            }
        });
    }

    fn ui_rate_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.rate.heading", "Period/rate conversion"),
            &txt(
                "gui.rate.tip",
                "Billing basis: 1 day = 8 h, 1 week = 40 h, 1 month = 176 h.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.rate.kind", "Quantity"));
                    let kind_label = |k: QuantityKind| match k {
                        QuantityKind::Duration => txt("gui.rate.kind_duration", "Duration"),
                        QuantityKind::RentalRate => txt("gui.rate.kind_rate", "Rental rate"),
                    };
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(kind_label(self.conv_kind))
                        .show_ui(ui, |ui| {
                            for kind in [QuantityKind::Duration, QuantityKind::RentalRate] {
                                ui.selectable_value(&mut self.conv_kind, kind, kind_label(kind));
                            }
                        });
                    ui.end_row();

                    ui.label(txt("gui.rate.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.rate.from", "From unit"));
                    unit_combo(ui, "conv_from", &mut self.conv_from);
                    ui.end_row();

                    ui.label(txt("gui.rate.to", "To unit"));
                    unit_combo(ui, "conv_to", &mut self.conv_to);
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.rate.run", "Convert")).clicked() {
                self.conv_result = match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => Some(format!("{v:.2} ({})", self.conv_to.trim())),
                    Err(e) => Some(format!("{}: {e}", txt("gui.rate.error_prefix", "Error"))),
                };
            }
            if let Some(res) = &self.conv_result {
                ui.label(res);
            }
        });
    }

    fn ui_catalog(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.catalog.heading", "Equipment reference prices"),
            &txt(
                "gui.catalog.tip",
                "Reference values only; quote from contracted rates.",
            ),
        );
        ui.add_space(8.0);
        let mut send_code: Option<&'static str> = None;
        egui::Grid::new("catalog_table")
            .num_columns(7)
            .spacing([12.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(txt("gui.catalog.col_code", "Code"));
                ui.strong(txt("gui.catalog.col_name", "Name"));
                ui.strong(txt("gui.catalog.col_price", "Price [KRW]"));
                ui.strong(txt("gui.catalog.col_rate", "Monthly [KRW]"));
                ui.strong(txt("gui.catalog.col_maintenance", "Maint [KRW/h]"));
                ui.strong(txt("gui.catalog.col_hours", "Annual [h]"));
                ui.strong("");
                ui.end_row();
                for eq in catalog::equipment() {
                    ui.label(eq.code);
                    ui.label(eq.name).on_hover_text(eq.notes);
                    ui.label(format!("{:.0}", eq.purchase_price));
                    ui.label(format!("{:.0}", eq.monthly_rental_rate));
                    ui.label(format!("{:.0}", eq.maintenance_per_hour));
                    ui.label(format!("{:.0}", eq.default_annual_hours));
                    if ui
                        .button(txt("gui.catalog.send", "Send to comparison"))
                        .clicked()
                    {
                        send_code = Some(eq.code);
                    }
                    ui.end_row();
                }
            });
        if let Some(code) = send_code {
            self.rvb_preset = code.to_string();
            self.apply_preset(code);
            self.tab = Tab::RentVsBuy;
        }
    }
}

fn rate_unit_label(unit: RateUnit) -> &'static str {
    match unit {
        RateUnit::PerHour => "원/h",
        RateUnit::PerDay => "원/일",
        RateUnit::PerWeek => "원/주",
        RateUnit::PerMonth => "원/월",
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String) {
    let options = [("h", "h"), ("d", "d"), ("w", "w"), ("mo", "mo")];
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.to_string(), label);
            }
        });
}

fn format_cost_output<F>(txt: &F, output: &CostModelOutput) -> String
where
    F: Fn(&str, &str) -> String,
{
    let recommendation = match output.recommendation {
        Recommendation::Rent => txt("gui.rvb.recommend_rent", "Recommendation: renting is cheaper."),
        Recommendation::Buy => txt("gui.rvb.recommend_buy", "Recommendation: buying is cheaper."),
    };
    format!(
        "{:.1} %\n\
         BUY  {:.0} / {:.0} 원 (운전 {:.0}, 정비 {:.0}, 보험 {:.0}, 금융 {:.0}, 상각 {:.0}, 잔존 {:.0})\n\
         RENT {:.0} / {:.0} 원 (렌탈 {:.0}, 운전 {:.0}, {:.2} 개월/년)\n\
         Δ {:.0} 원 ({:.1} %)\n\
         {}",
        output.utilization_rate * 100.0,
        output.buy.total_before_tax,
        output.buy.total_after_tax,
        output.buy.operator_cost,
        output.buy.maintenance_cost,
        output.buy.insurance_cost,
        output.buy.financing_cost,
        output.buy.total_depreciation,
        output.buy.resale_value,
        output.rent.total_before_tax,
        output.rent.total_after_tax,
        output.rent.rental_cost,
        output.rent.operator_cost,
        output.rent.rental_months_per_year,
        output.savings,
        output.savings_percent,
        recommendation
    )
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.55).max(900.0), (screen.y * 0.6).max(640.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Rental Decision Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui
                    .button(txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut assumptions = self.config.assumptions.clone();
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button("...").clicked() {
                            if let Some(p) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = p.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_load", "Apply font")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.label(err);
                    }
                    ui.separator();
                    ui.heading(txt("gui.settings.assumptions", "Default financial assumptions"));
                    egui::Grid::new("assumption_grid")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            ui.label(txt("gui.settings.interest", "Default annual interest [%]"));
                            let mut interest_pct = assumptions.annual_interest_rate * 100.0;
                            if ui
                                .add(
                                    egui::DragValue::new(&mut interest_pct)
                                        .speed(0.1)
                                        .clamp_range(0.0..=99.0)
                                        .suffix(" %"),
                                )
                                .changed()
                            {
                                assumptions.annual_interest_rate = interest_pct / 100.0;
                            }
                            ui.end_row();

                            ui.label(txt("gui.settings.tax", "Default effective tax rate [%]"));
                            let mut tax_pct = assumptions.tax_rate * 100.0;
                            if ui
                                .add(
                                    egui::DragValue::new(&mut tax_pct)
                                        .speed(0.1)
                                        .clamp_range(0.0..=99.0)
                                        .suffix(" %"),
                                )
                                .changed()
                            {
                                assumptions.tax_rate = tax_pct / 100.0;
                            }
                            ui.end_row();

                            ui.label(txt("gui.settings.wage", "Default operator wage [KRW/h]"));
                            ui.add(
                                egui::DragValue::new(&mut assumptions.operator_wage_hourly)
                                    .speed(1000.0),
                            );
                            ui.end_row();
                        });
                    ui.checkbox(
                        &mut assumptions.clamp_depreciation,
                        txt("gui.settings.clamp", "Clamp depreciation to purchase price"),
                    );
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            self.config.assumptions = assumptions;
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline calculator for equipment rent/buy decisions",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.basis",
                        "- All comparisons use after-tax total cost of ownership.",
                    ));
                    ui.label(txt(
                        "gui.about.billing",
                        "- Billing basis: 1 day = 8 h, 1 week = 40 h, 1 month = 176 h.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "If Korean text looks broken, set a font in Settings.",
                    ));
                });
        }

        // 수식 안내 모달
        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.formula.buy",
                        "Buy: price + operator (2080 h x wage x years) + maintenance + insurance (1.5%/yr) + financing ((price/2) x rate x years) - resale value",
                    ));
                    ui.label(txt(
                        "gui.formula.depreciation",
                        "Depreciation: 20% year 1, then 12%/year of acquisition price; resale = price - total depreciation",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.rent",
                        "Rent: monthly rate x (hours/176) x years + operator (hours x wage x years)",
                    ));
                    ui.label(txt(
                        "gui.formula.tax",
                        "After tax: pre-tax total - deductible (buy=depreciation, rent=rental fee) x tax rate",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.roi",
                        "ROI: effective monthly revenue = nameplate rate x utilization; payback = price / net monthly income",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::RentVsBuy => self.ui_rent_vs_buy(ui),
                Tab::Roi => self.ui_roi(ui),
                Tab::Depreciation => self.ui_depreciation(ui),
                Tab::RateConv => self.ui_rate_conv(ui),
                Tab::Catalog => self.ui_catalog(ui),
            });
        });
    }
}
