use crate::roster::Roster;

/// Outcome of a self-service role change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    /// Accepted by the command table but never applied.
    Unsupported,
}

/// Friendly names of the user's roles that are also in the assignable roster,
/// in the order the user's roles were given.
pub fn my_roles<I, S>(user_role_ids: I, assignable: &Roster) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    user_role_ids
        .into_iter()
        .filter_map(|id| assignable.find_by_id(id.as_ref()))
        .map(|entry| entry.friendly_name.clone())
        .collect()
}

pub fn list_assignable(assignable: &Roster) -> Vec<String> {
    assignable
        .entries()
        .iter()
        .map(|entry| entry.friendly_name.clone())
        .collect()
}

pub fn add_role(_user_id: &str, _role_name: &str, _assignable: &Roster) -> RoleChange {
    RoleChange::Unsupported
}

pub fn remove_role(_user_id: &str, _role_name: &str, _assignable: &Roster) -> RoleChange {
    RoleChange::Unsupported
}

/// Renders names as `` `A`, `B` ``.
pub fn format_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub mod commands {
    use super::{format_names, RoleChange};
    use crate::commands::{Command, Invocation};
    use crate::Error;

    const UNSUPPORTED_REPLY: &str = "Assigning roles to yourself is not supported yet.";

    pub struct ListMyRoles;

    #[async_trait::async_trait]
    impl Command for ListMyRoles {
        fn name(&self) -> &'static str {
            "listmyroles"
        }

        fn usage(&self) -> &'static str {
            "!listmyroles - Prints your current assigned roles."
        }

        async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error> {
            if !args.is_empty() {
                return Ok(self.usage().to_string());
            }

            let role_ids = inv
                .gateway
                .member_role_ids(&inv.bot.config.guild_id, inv.author_id)
                .await?;
            let names = super::my_roles(&role_ids, &inv.bot.roles);

            Ok(format!("Your roles are: {}", format_names(&names)))
        }
    }

    pub struct ListRoles;

    #[async_trait::async_trait]
    impl Command for ListRoles {
        fn name(&self) -> &'static str {
            "listroles"
        }

        fn usage(&self) -> &'static str {
            "!listroles - Lists roles you can assign to yourself."
        }

        async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error> {
            if !args.is_empty() {
                return Ok(self.usage().to_string());
            }

            tracing::debug!("Listing the available roles");
            let names = super::list_assignable(&inv.bot.roles);

            Ok(format!(
                "The following roles are available: {}",
                format_names(&names)
            ))
        }
    }

    pub struct AddRole;

    #[async_trait::async_trait]
    impl Command for AddRole {
        fn name(&self) -> &'static str {
            "addrole"
        }

        fn usage(&self) -> &'static str {
            "!addrole <role> - Adds the requested role to you."
        }

        async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error> {
            let [role] = args else {
                return Ok(self.usage().to_string());
            };

            match super::add_role(inv.author_id, role, &inv.bot.roles) {
                RoleChange::Unsupported => Ok(UNSUPPORTED_REPLY.to_string()),
            }
        }
    }

    pub struct RemoveRole;

    #[async_trait::async_trait]
    impl Command for RemoveRole {
        fn name(&self) -> &'static str {
            "removerole"
        }

        fn usage(&self) -> &'static str {
            "!removerole <role> - Removes the role from you."
        }

        async fn execute(&self, args: &[&str], inv: &Invocation<'_>) -> Result<String, Error> {
            let [role] = args else {
                return Ok(self.usage().to_string());
            };

            match super::remove_role(inv.author_id, role, &inv.bot.roles) {
                RoleChange::Unsupported => Ok(UNSUPPORTED_REPLY.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::parse("Admin1 12345\nAdmin2 67890\n")
    }

    #[test]
    fn my_roles_omits_unmatched_ids() {
        assert_eq!(my_roles(["12345", "99999"], &roster()), vec!["Admin1"]);
    }

    #[test]
    fn my_roles_follows_caller_order() {
        assert_eq!(
            my_roles(["67890", "12345"], &roster()),
            vec!["Admin2", "Admin1"]
        );
        assert!(my_roles(Vec::<String>::new(), &roster()).is_empty());
    }

    #[test]
    fn list_assignable_is_in_roster_order() {
        assert_eq!(list_assignable(&roster()), vec!["Admin1", "Admin2"]);
    }

    #[test]
    fn role_changes_are_unsupported() {
        assert_eq!(add_role("1", "Admin1", &roster()), RoleChange::Unsupported);
        assert_eq!(remove_role("1", "Admin1", &roster()), RoleChange::Unsupported);
    }

    #[test]
    fn names_are_quoted_and_joined() {
        assert_eq!(
            format_names(&["A".to_string(), "B".to_string()]),
            "`A`, `B`"
        );
        assert_eq!(format_names(&[]), "");
    }
}
