#[derive(Debug, Clone)]
pub enum Message {
    // === MEMBER MESSAGES ===
    MemberAdded(String), // name
    MemberNameRequired,
    MembersHeader,
    NoMembersFound,
    AddMembersFirst,
    SelectMember,
    SelectMemberAction,

    // === GROUP PLAN MESSAGES ===
    PlanAdded(String), // name
    PlanNameRequired,
    PlansHeader,
    NoPlansFound,
    AddPlansFirst,
    SelectPlan,
    SelectPlanAction,
    DurationMustBePositive,
    PriceMustNotBeNegative,

    // === GROUP CLASS MEMBERSHIP MESSAGES ===
    GroupMembershipAdded(i64, String), // id, end date
    GroupMembershipsHeader,
    NoGroupMembershipsFound,
    SelectGroupAction,

    // === PT MEMBERSHIP MESSAGES ===
    PtMembershipAdded(i64, i64), // id, sessions
    PtMembershipsHeader,
    NoPtMembershipsFound,
    SelectPtAction,
    SessionsMustBePositive,

    // === IMPORT MESSAGES ===
    ImportReading(String),     // path
    ImportFileMissing(String), // path
    ImportDefaultPlanCreated(String),
    ImportGroupCompleted(usize), // rows
    ImportPtCompleted(usize),    // rows
    ImportFinished(usize, usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleDatabase,
    DatabaseReady(String), // path

    // === DATABASE MESSAGES ===
    NoIdSet,

    // === PROMPTS ===
    PromptMemberName,
    PromptMemberEmail,
    PromptMemberPhone,
    PromptJoinDate,
    PromptPlanName,
    PromptPlanDuration,
    PromptPlanPrice,
    PromptStartDate,
    PromptPaymentDate,
    PromptSessions,
    PromptPtPrice,
    PromptDbPath,
    PromptCurrency,
}
