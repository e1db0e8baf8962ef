use crate::application::dto::AuditLogDto;

const HEADER: &str =
    "id,timestamp,level,action,entity_type,entity_id,user,admin,ip_address,details";

/// RFC 4180 quoting: a field containing a comma, quote, or newline is
/// wrapped in quotes with inner quotes doubled.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_csv(rows: &[AuditLogDto]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(HEADER);
    out.push_str("\r\n");

    for row in rows {
        let user = row
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .or_else(|| row.user_id.map(|id| id.to_string()))
            .unwrap_or_default();
        let admin = row
            .admin
            .as_ref()
            .map(|a| a.email.clone())
            .or_else(|| row.admin_id.map(|id| id.to_string()))
            .unwrap_or_default();
        let details = row
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        let fields = [
            row.id.to_string(),
            row.timestamp.to_rfc3339(),
            row.level.to_string(),
            row.action.clone(),
            row.entity_type.clone(),
            row.entity_id.map(|id| id.to_string()).unwrap_or_default(),
            user,
            admin,
            row.ip_address.clone().unwrap_or_default(),
            details,
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(escape_csv("USER_CREATED"), "USER_CREATED");
    }

    #[test]
    fn commas_force_quoting() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn newlines_force_quoting() {
        assert_eq!(escape_csv("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn output_starts_with_bom_and_header() {
        let csv = write_csv(&[]);
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("id,timestamp,level"));
    }
}
