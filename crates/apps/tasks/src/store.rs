use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum TaskError {
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("task {0} not found")]
    NotFound(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub(crate) const ALL: [TaskFilter; 3] = [Self::All, Self::Active, Self::Completed];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.done,
            Self::Completed => task.done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

fn normalized_title(raw: &str) -> Result<String, TaskError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(title.to_string())
}

impl TaskList {
    pub(crate) fn add(&mut self, raw_title: &str) -> Result<u64, TaskError> {
        let title = normalized_title(raw_title)?;
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.tasks.push(Task {
            id,
            title,
            done: false,
        });
        Ok(id)
    }

    pub(crate) fn toggle(&mut self, id: u64) -> Result<(), TaskError> {
        let task = self.find_mut(id)?;
        task.done = !task.done;
        Ok(())
    }

    pub(crate) fn rename(&mut self, id: u64, raw_title: &str) -> Result<(), TaskError> {
        let title = normalized_title(raw_title)?;
        self.find_mut(id)?.title = title;
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: u64) -> Result<(), TaskError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Drops completed tasks and returns how many were removed.
    pub(crate) fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.done);
        before - self.tasks.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn visible(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(list: &TaskList, filter: TaskFilter) -> Vec<String> {
        list.visible(filter).into_iter().map(|task| task.title).collect()
    }

    #[test]
    fn add_trims_titles_and_assigns_increasing_ids() {
        let mut list = TaskList::default();
        let first = list.add("  buy milk ").expect("add");
        let second = list.add("write report").expect("add");

        assert_eq!((first, second), (1, 2));
        assert_eq!(titles(&list, TaskFilter::All), vec!["buy milk", "write report"]);
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn empty_titles_are_rejected() {
        let mut list = TaskList::default();
        assert_eq!(list.add("   "), Err(TaskError::EmptyTitle));
        assert_eq!(list.len(), 0);

        let id = list.add("keep").expect("add");
        assert_eq!(list.rename(id, ""), Err(TaskError::EmptyTitle));
        assert_eq!(titles(&list, TaskFilter::All), vec!["keep"]);
    }

    #[test]
    fn toggle_and_filters() {
        let mut list = TaskList::default();
        let a = list.add("a").expect("add");
        list.add("b").expect("add");

        list.toggle(a).expect("toggle");
        assert_eq!(list.remaining(), 1);
        assert_eq!(titles(&list, TaskFilter::Active), vec!["b"]);
        assert_eq!(titles(&list, TaskFilter::Completed), vec!["a"]);

        list.toggle(a).expect("toggle back");
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn rename_and_remove_report_missing_ids() {
        let mut list = TaskList::default();
        let id = list.add("draft").expect("add");

        list.rename(id, " final ").expect("rename");
        assert_eq!(titles(&list, TaskFilter::All), vec!["final"]);

        assert_eq!(list.rename(9, "x"), Err(TaskError::NotFound(9)));
        assert_eq!(list.toggle(9), Err(TaskError::NotFound(9)));
        assert_eq!(list.remove(9), Err(TaskError::NotFound(9)));

        list.remove(id).expect("remove");
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn clear_completed_keeps_active_tasks() {
        let mut list = TaskList::default();
        let a = list.add("a").expect("add");
        let b = list.add("b").expect("add");
        list.add("c").expect("add");
        list.toggle(a).expect("toggle");
        list.toggle(b).expect("toggle");

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(titles(&list, TaskFilter::All), vec!["c"]);
        assert_eq!(list.clear_completed(), 0);
    }
}
