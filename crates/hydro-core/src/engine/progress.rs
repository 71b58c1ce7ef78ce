#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseStart { name: "Noop" });
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                let label = match event {
                    Progress::PhaseStart { name } => format!("start:{name}"),
                    Progress::PhaseFinish => "finish".to_string(),
                    Progress::Message(msg) => format!("msg:{msg}"),
                };
                seen.lock().unwrap().push(label);
            }));
            reporter.report(Progress::PhaseStart { name: "Smoothing" });
            reporter.report(Progress::Message("3 kernels".to_string()));
            reporter.report(Progress::PhaseFinish);
        }
        assert_eq!(
            seen.into_inner().unwrap(),
            vec!["start:Smoothing", "msg:3 kernels", "finish"]
        );
    }
}
