use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_AREA_NAME: &str = "areas_name_key";
const CNT_DASHBOARD_AREA: &str = "dashboards_area_id_fkey";
const CNT_AREA_GRANT_USER: &str = "user_area_access_user_id_fkey";
const CNT_AREA_GRANT_AREA: &str = "user_area_access_area_id_fkey";
const CNT_DASH_GRANT_USER: &str = "user_dashboard_access_user_id_fkey";
const CNT_DASH_GRANT_DASHBOARD: &str = "user_dashboard_access_dashboard_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_AREA_NAME => DomainError::Conflict("area name already exists".into()),
                    CNT_DASHBOARD_AREA => DomainError::NotFound("area not found".into()),
                    CNT_AREA_GRANT_USER | CNT_DASH_GRANT_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_AREA_GRANT_AREA => DomainError::NotFound("area not found".into()),
                    CNT_DASH_GRANT_DASHBOARD => {
                        DomainError::NotFound("dashboard not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
