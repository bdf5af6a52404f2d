use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};

use crate::automaton::{MealyTable, MooreTable, State};
use crate::Show;

fn build_table<D>(
    header: Vec<String>,
    rows: Vec<(State, Vec<String>)>,
    state_decorator: D,
) -> String
where
    D: Fn(State) -> String,
{
    let mut builder = Builder::default();
    builder.push_record(header);
    for (state, cells) in rows {
        builder.push_record(std::iter::once(state_decorator(state)).chain(cells));
    }
    builder.build().with(Style::rounded()).to_string()
}

impl MealyTable {
    fn transition_table<D: Fn(State) -> String>(&self, state_decorator: D) -> String {
        let header: Vec<String> = std::iter::once("State".to_string())
            .chain((0..self.inputs()).flat_map(|input| {
                [format!("Next on {input}"), format!("Output on {input}")]
            }))
            .collect();
        let rows = self
            .rows()
            .enumerate()
            .map(|(state, row)| {
                let cells: Vec<String> = row
                    .iter()
                    .flat_map(|edge| [self.name(edge.target), edge.output.to_string()])
                    .collect();
                (state, cells)
            })
            .collect();
        build_table(header, rows, state_decorator)
    }
}

impl MooreTable {
    fn transition_table<D: Fn(State) -> String>(&self, state_decorator: D) -> String {
        let header: Vec<String> = ["State".to_string(), "Output".to_string()]
            .into_iter()
            .chain((0..self.inputs()).map(|input| format!("On Input {input}")))
            .collect();
        let rows = self
            .rows()
            .zip(self.outputs())
            .enumerate()
            .map(|(state, (row, output))| {
                let cells: Vec<String> = std::iter::once(output.to_string())
                    .chain(row.iter().map(|&target| self.name(target)))
                    .collect();
                (state, cells)
            })
            .collect();
        build_table(header, rows, state_decorator)
    }
}

impl Show for MealyTable {
    fn show(&self) -> String {
        self.transition_table(|q| self.name(q))
    }

    fn show_highlighted(&self) -> String {
        self.transition_table(|q| self.name(q).bold().to_string())
    }
}

impl Show for MooreTable {
    fn show(&self) -> String {
        self.transition_table(|q| self.name(q))
    }

    fn show_highlighted(&self) -> String {
        self.transition_table(|q| self.name(q).bold().to_string())
    }
}
