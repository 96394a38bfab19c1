//! Sheet names and column headers per locale.

use crate::calculation::Locale;

/// Every caption the report tables print.
#[derive(Debug)]
pub(crate) struct Labels {
    pub holidays_sheet: &'static str,
    pub holidays_headers: [&'static str; 3],
    pub proposals_sheet: &'static str,
    pub proposals_headers: [&'static str; 7],
    pub personal_sheet: &'static str,
    pub personal_headers: [&'static str; 3],
    pub custom_sheet: &'static str,
    pub custom_headers: [&'static str; 4],
    pub summary_sheet: &'static str,
    pub summary_headers: [&'static str; 2],
    pub total: &'static str,
    pub in_proposals: &'static str,
    pub in_custom: &'static str,
    pub planned: &'static str,
    pub remaining: &'static str,
    pub warning: &'static str,
}

const EN: Labels = Labels {
    holidays_sheet: "Holidays",
    holidays_headers: ["Date", "Weekday", "Holiday"],
    proposals_sheet: "Proposals",
    proposals_headers: [
        "Id",
        "Interval",
        "PTO dates",
        "PTO days",
        "Included",
        "Rationale",
        "Idea",
    ],
    personal_sheet: "Personal days",
    personal_headers: ["Date", "Weekday", "Label"],
    custom_sheet: "Custom intervals",
    custom_headers: ["Start", "End", "Description", "PTO days"],
    summary_sheet: "PTO summary",
    summary_headers: ["Indicator", "Value"],
    total: "Total PTO available",
    in_proposals: "PTO in proposals",
    in_custom: "PTO in custom intervals",
    planned: "PTO planned",
    remaining: "PTO remaining",
    warning: "Warning",
};

const RO: Labels = Labels {
    holidays_sheet: "Zile libere",
    holidays_headers: ["Data", "Ziua", "Sărbătoare"],
    proposals_sheet: "Propuneri vacanțe",
    proposals_headers: [
        "Id",
        "Interval",
        "Zile PTO",
        "Zile PTO folosite",
        "Inclus",
        "Motiv",
        "Idee",
    ],
    personal_sheet: "Zile personale",
    personal_headers: ["Data", "Ziua", "Descriere"],
    custom_sheet: "Intervale proprii",
    custom_headers: ["Început", "Sfârșit", "Descriere", "Zile PTO folosite"],
    summary_sheet: "Rezumat PTO",
    summary_headers: ["Indicator", "Valoare"],
    total: "Total PTO disponibil",
    in_proposals: "PTO planificat în propuneri",
    in_custom: "PTO planificat în intervale proprii",
    planned: "PTO planificat",
    remaining: "PTO rămas",
    warning: "Avertisment",
};

impl Labels {
    pub(crate) fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ro => &RO,
        }
    }
}
