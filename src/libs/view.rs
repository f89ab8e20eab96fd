use super::config::{ProjectConfig, UserConfig};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn users(users: &[UserConfig]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "CALENDAR", "VACATION", "MONTH HOURS"]);
        for user in users {
            table.add_row(row![user.name, user.cal, user.vacation, user.monthhours]);
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[ProjectConfig]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "ONSITE", "REMOTE"]);
        for project in projects {
            table.add_row(row![
                project.name,
                format!("{:.2}", project.onsite),
                format!("{:.2}", project.remote)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
