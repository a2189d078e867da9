use super::*;

impl PostgresUserRepository {
    pub(super) async fn create_impl(&self, user: NewUser) -> AppResult<UserRecord> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, display_name, password_hash, gender)
            VALUES (LOWER($1), $2, $3, $4)
            RETURNING id, email, display_name, password_hash, gender,
                      created_at, updated_at, version
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.display_name.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.gender.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| unique_conflict_or_internal(error, "create user"))?;

        UserRecord::try_from(row)
    }
}
