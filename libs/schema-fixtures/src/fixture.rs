use std::fmt;

/// Schema fixtures shipped with this crate, one per response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaFixture {
    /// `GET /api/users/{id}`
    OneUser,
    /// `GET /api/users`
    Users,
    /// `POST /api/users`
    CreatedUser,
    /// `POST /api/register`
    CompleteRegistration,
    /// `PUT` and `PATCH /api/users/{id}`
    UpdateUser,
}

impl SchemaFixture {
    pub const ALL: [SchemaFixture; 5] = [
        SchemaFixture::OneUser,
        SchemaFixture::Users,
        SchemaFixture::CreatedUser,
        SchemaFixture::CompleteRegistration,
        SchemaFixture::UpdateUser,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SchemaFixture::OneUser => "one_user_schema.json",
            SchemaFixture::Users => "users_schema.json",
            SchemaFixture::CreatedUser => "created_user_schema.json",
            SchemaFixture::CompleteRegistration => "complete_registration_schema.json",
            SchemaFixture::UpdateUser => "update_user_schema.json",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.file_name() == name)
    }
}

impl fmt::Display for SchemaFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
