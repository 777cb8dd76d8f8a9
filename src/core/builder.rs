use super::error::AssessmentError;
use super::types::*;

/// Builder for quiz answers.
///
/// ```
/// use biogov::core::*;
///
/// let answers = QuizAnswersBuilder::new()
///     .activity(Activity::Company)
///     .revenue(RevenueBand::High)
///     .clients(ClientBase::Business)
///     .employees(EmployeeCount::SixOrMore)
///     .voluntary(VoluntaryIntent::No)
///     .build()
///     .unwrap();
/// assert_eq!(answers.revenue, RevenueBand::High);
/// ```
#[derive(Debug, Default)]
pub struct QuizAnswersBuilder {
    activity: Option<Activity>,
    revenue: Option<RevenueBand>,
    clients: Option<ClientBase>,
    employees: Option<EmployeeCount>,
    voluntary: Option<VoluntaryIntent>,
}

impl QuizAnswersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activity(mut self, activity: Activity) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn revenue(mut self, revenue: RevenueBand) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn clients(mut self, clients: ClientBase) -> Self {
        self.clients = Some(clients);
        self
    }

    pub fn employees(mut self, employees: EmployeeCount) -> Self {
        self.employees = Some(employees);
        self
    }

    pub fn voluntary(mut self, voluntary: VoluntaryIntent) -> Self {
        self.voluntary = Some(voluntary);
        self
    }

    /// Build the answers. Every field must have been set.
    pub fn build(self) -> Result<QuizAnswers, AssessmentError> {
        Ok(QuizAnswers {
            activity: self.activity.ok_or_else(|| missing("activity"))?,
            revenue: self.revenue.ok_or_else(|| missing("revenue"))?,
            clients: self.clients.ok_or_else(|| missing("clients"))?,
            employees: self.employees.ok_or_else(|| missing("employees"))?,
            voluntary: self.voluntary.ok_or_else(|| missing("voluntary"))?,
        })
    }
}

fn missing(field: &str) -> AssessmentError {
    AssessmentError::Builder(format!("{field} is required"))
}

/// Builder for checklist items. The step number is assigned when the
/// item is placed into a checklist.
pub struct ChecklistItemBuilder {
    title: String,
    description: String,
    link: Option<String>,
    link_text: Option<String>,
    estimated_time: Option<String>,
}

impl ChecklistItemBuilder {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: None,
            link_text: None,
            estimated_time: None,
        }
    }

    pub fn link(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self.link_text = Some(text.into());
        self
    }

    pub fn estimated_time(mut self, time: impl Into<String>) -> Self {
        self.estimated_time = Some(time.into());
        self
    }

    /// Build the item at the given 1-based step.
    pub fn build(self, step: u32) -> ChecklistItem {
        ChecklistItem {
            step,
            title: self.title,
            description: self.description,
            link: self.link,
            link_text: self.link_text,
            estimated_time: self.estimated_time,
        }
    }
}

/// Number a sequence of items 1..=n in order.
pub fn number_steps(items: impl IntoIterator<Item = ChecklistItemBuilder>) -> Vec<ChecklistItem> {
    items
        .into_iter()
        .zip(1u32..)
        .map(|(item, step)| item.build(step))
        .collect()
}
