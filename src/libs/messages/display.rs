//! Display implementation for kranos application messages.
//!
//! All user-facing text lives in this one `match`, so wording stays
//! consistent across commands and every new [`Message`] variant needs an
//! explicit text decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MEMBER MESSAGES ===
            Message::MemberAdded(name) => format!("Added member: {}", name),
            Message::MemberNameRequired => "Name is required.".to_string(),
            Message::MembersHeader => "All Members".to_string(),
            Message::NoMembersFound => "No members found.".to_string(),
            Message::AddMembersFirst => "No members found. Please add members with 'kranos member add' first.".to_string(),
            Message::SelectMember => "Select member".to_string(),
            Message::SelectMemberAction => "Members".to_string(),

            // === GROUP PLAN MESSAGES ===
            Message::PlanAdded(name) => format!("Added plan: {}", name),
            Message::PlanNameRequired => "Plan Name is required.".to_string(),
            Message::PlansHeader => "All Group Plans".to_string(),
            Message::NoPlansFound => "No group plans found.".to_string(),
            Message::AddPlansFirst => "No group plans found. Please add plans with 'kranos plan add' first.".to_string(),
            Message::SelectPlan => "Select plan".to_string(),
            Message::SelectPlanAction => "Group Plans".to_string(),
            Message::DurationMustBePositive => "Duration must be at least 1 day.".to_string(),
            Message::PriceMustNotBeNegative => "Price must not be negative.".to_string(),

            // === GROUP CLASS MEMBERSHIP MESSAGES ===
            Message::GroupMembershipAdded(id, end_date) => format!("Added group membership #{} (ends {})", id, end_date),
            Message::GroupMembershipsHeader => "Group Class Memberships".to_string(),
            Message::NoGroupMembershipsFound => "No group class memberships found.".to_string(),
            Message::SelectGroupAction => "Group Class Memberships".to_string(),

            // === PT MEMBERSHIP MESSAGES ===
            Message::PtMembershipAdded(id, sessions) => format!("Added PT membership #{} with {} sessions", id, sessions),
            Message::PtMembershipsHeader => "PT Memberships".to_string(),
            Message::NoPtMembershipsFound => "No PT memberships found.".to_string(),
            Message::SelectPtAction => "PT Memberships".to_string(),
            Message::SessionsMustBePositive => "Session count must be at least 1.".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportReading(path) => format!("Importing '{}'...", path),
            Message::ImportFileMissing(path) => format!("'{}' not found. Skipping.", path),
            Message::ImportDefaultPlanCreated(name) => format!("No group plans found. Added default plan '{}'.", name),
            Message::ImportGroupCompleted(count) => format!("Imported {} group class member(s).", count),
            Message::ImportPtCompleted(count) => format!("Imported {} PT member(s).", count),
            Message::ImportFinished(group, pt) => format!("Import finished: {} group class and {} PT record(s).", group, pt),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::DatabaseReady(path) => format!("Database ready at {}", path),

            // === DATABASE MESSAGES ===
            Message::NoIdSet => "Record has no id after insert".to_string(),

            // === PROMPTS ===
            Message::PromptMemberName => "Name".to_string(),
            Message::PromptMemberEmail => "Email (optional)".to_string(),
            Message::PromptMemberPhone => "Phone (optional)".to_string(),
            Message::PromptJoinDate => "Join date (YYYY-MM-DD)".to_string(),
            Message::PromptPlanName => "Plan name".to_string(),
            Message::PromptPlanDuration => "Duration (days)".to_string(),
            Message::PromptPlanPrice => "Price".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptPaymentDate => "Payment date (YYYY-MM-DD)".to_string(),
            Message::PromptSessions => "Number of sessions".to_string(),
            Message::PromptPtPrice => "Amount paid".to_string(),
            Message::PromptDbPath => "Database file".to_string(),
            Message::PromptCurrency => "Currency symbol".to_string(),
        };

        write!(f, "{}", text)
    }
}
