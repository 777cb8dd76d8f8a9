//! Next-step checklists, one fixed ordered table per status.

use crate::core::{ChecklistItem, ChecklistItemBuilder, VatStatus, number_steps};

const TAX_AUTHORITY_URL: &str =
    "https://www.gov.il/he/departments/israel_tax_authority/govil-landing-page";
const NATIONAL_INSURANCE_URL: &str = "https://www.btl.gov.il/";

/// Build the checklist for a status. Steps are numbered 1..=n.
pub fn checklist_for(status: VatStatus) -> Vec<ChecklistItem> {
    match status {
        VatStatus::Exempt => number_steps([
            open_vat_file("עוסק פטור", "5 דקות"),
            ChecklistItemBuilder::new(
                "הודעה למס הכנסה",
                "פתיחת התיק במע\"מ מעדכנת גם את פקיד השומה. ודא שהתיק נפתח ושמור את מספר התיק.",
            )
            .link(TAX_AUTHORITY_URL, "רשות המסים")
            .estimated_time("2 דקות"),
            ChecklistItemBuilder::new(
                "רישום בביטוח לאומי",
                "רישום כעצמאי בביטוח לאומי וקביעת מקדמות חודשיות.",
            )
            .link(NATIONAL_INSURANCE_URL, "ביטוח לאומי")
            .estimated_time("3 דקות"),
        ]),
        VatStatus::Choice => number_steps([
            ChecklistItemBuilder::new(
                "שקילת היתרונות והחסרונות",
                "השווה את מע\"מ התשומות שתוכל לקזז מול עלות הנהלת החשבונות והדיווחים. \
                 רישום מרצון מחייב להישאר עוסק מורשה לפחות שנה.",
            )
            .estimated_time("1 שעה"),
            open_vat_file("עוסק מורשה (מרצון)", "1 שעה"),
            bookkeeping(),
            ChecklistItemBuilder::new(
                "רישום בביטוח לאומי",
                "רישום כעצמאי בביטוח לאומי וקביעת מקדמות חודשיות.",
            )
            .link(NATIONAL_INSURANCE_URL, "ביטוח לאומי")
            .estimated_time("20 דקות"),
        ]),
        VatStatus::Authorized => number_steps([
            open_vat_file("עוסק מורשה", "1 שעה"),
            ChecklistItemBuilder::new(
                "פתיחת תיק במס הכנסה",
                "פתיחת תיק אצל פקיד השומה ותיאום מקדמות מס הכנסה.",
            )
            .link(TAX_AUTHORITY_URL, "רשות המסים")
            .estimated_time("30 דקות"),
            ChecklistItemBuilder::new(
                "רישום בביטוח לאומי",
                "רישום כעצמאי בביטוח לאומי וקביעת מקדמות חודשיות.",
            )
            .link(NATIONAL_INSURANCE_URL, "ביטוח לאומי")
            .estimated_time("20 דקות"),
            bookkeeping(),
            ChecklistItemBuilder::new(
                "הגשת דוחות מע\"מ תקופתיים",
                "דיווח ותשלום מע\"מ חודשי או דו-חודשי עד ה-15 בחודש העוקב.",
            )
            .link(TAX_AUTHORITY_URL, "רשות המסים")
            .estimated_time("15 דקות"),
        ]),
    }
}

fn open_vat_file(kind: &str, time: &str) -> ChecklistItemBuilder {
    ChecklistItemBuilder::new(
        format!("פתיחת תיק במע\"מ כ{kind}"),
        "פתיחת תיק באתר רשות המסים או במשרד מע\"מ האזורי. יש להצטייד בתעודת זהות ובפרטי חשבון בנק.",
    )
    .link(TAX_AUTHORITY_URL, "רשות המסים")
    .estimated_time(time)
}

fn bookkeeping() -> ChecklistItemBuilder {
    ChecklistItemBuilder::new(
        "הקמת הנהלת חשבונות",
        "בחירת תוכנה להפקת חשבוניות מס ורישום הוצאות, או התקשרות עם רואה חשבון.",
    )
    .estimated_time("1 שעה")
}
