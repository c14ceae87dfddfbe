#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// Signup joined to its activity, for the camper detail listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupWithActivityRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

/// Signup joined to both parents, for the create response.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupWithRefsRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}
