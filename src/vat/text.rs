//! Hebrew labels and explanations per status.

use crate::core::VatStatus;

/// Localized status label.
pub fn status_text(status: VatStatus) -> &'static str {
    match status {
        VatStatus::Exempt => "עוסק פטור",
        VatStatus::Authorized => "עוסק מורשה",
        VatStatus::Choice => "זכאי לעוסק פטור - בחרת לפתוח עוסק מורשה",
    }
}

/// Localized explanation of why the status applies.
pub fn explanation(status: VatStatus) -> &'static str {
    match status {
        VatStatus::Exempt => {
            "המחזור השנתי הצפוי שלך נמוך מ-120,000 ₪, ולכן אתה זכאי להירשם כעוסק פטור. \
             עוסק פטור אינו גובה מע\"מ מלקוחותיו ואינו מקזז מע\"מ על הוצאות, \
             ופטור מהגשת דוחות מע\"מ תקופתיים. יש להגיש הצהרת מחזור שנתית עד סוף ינואר."
        }
        VatStatus::Authorized => {
            "המחזור השנתי הצפוי שלך הוא 120,000 ₪ ומעלה, ולכן חובה עליך להירשם כעוסק מורשה. \
             עוסק מורשה גובה מע\"מ על כל עסקה, רשאי לקזז מע\"מ תשומות על הוצאות העסק, \
             ונדרש להגיש דוחות מע\"מ תקופתיים ולנהל הנהלת חשבונות."
        }
        VatStatus::Choice => {
            "המחזור השנתי הצפוי שלך נמוך מ-120,000 ₪ ולכן אתה זכאי להיות עוסק פטור, \
             אך בחרת להירשם מרצון כעוסק מורשה. רישום מרצון מאפשר לקזז מע\"מ על הוצאות \
             ומתאים בעיקר לעסקים שלקוחותיהם עסקים או שיש להם הוצאות גבוהות. \
             שים לב: לאחר הרישום תחויב בדוחות מע\"מ תקופתיים ובהנהלת חשבונות."
        }
    }
}

/// Estimated total time to complete the checklist for a status.
pub fn estimated_time_to_complete(status: VatStatus) -> &'static str {
    match status {
        VatStatus::Exempt => "5-10 דקות",
        VatStatus::Authorized => "2-3 שעות",
        VatStatus::Choice => "3-5 שעות",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let labels = [
            status_text(VatStatus::Exempt),
            status_text(VatStatus::Authorized),
            status_text(VatStatus::Choice),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn explanations_mention_threshold() {
        for s in [VatStatus::Exempt, VatStatus::Authorized, VatStatus::Choice] {
            assert!(explanation(s).contains("120,000"));
        }
    }
}
