use super::Transfer;

/// One entry in the portfolio tree: either a concrete transfer or a nested
/// group of entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Transfer(Transfer),
    Group(Group),
}

/// A named collection of transfers and sub-groups. Grouping is purely
/// organizational and has no numeric effect on the forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Sum of the daily averages of all transfers in this group, transitively.
    pub fn daily_average(&self) -> f64 {
        self.children.iter().map(Node::daily_average).sum()
    }
}

impl Node {
    pub fn daily_average(&self) -> f64 {
        match self {
            Node::Transfer(transfer) => transfer.daily_average(),
            Node::Group(group) => group.daily_average(),
        }
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a Transfer>) {
        match self {
            Node::Transfer(transfer) => out.push(transfer),
            Node::Group(group) => {
                for child in &group.children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

/// The root of the tree; owns every transfer transitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub entries: Vec<Node>,
}

impl Portfolio {
    pub fn new(entries: Vec<Node>) -> Self {
        Self { entries }
    }

    /// All transfers in the tree, depth-first, declaration order preserved.
    /// The simulator relies on this order for its same-date tie-break.
    pub fn flatten(&self) -> Vec<&Transfer> {
        let mut out = Vec::new();
        for entry in &self.entries {
            entry.flatten_into(&mut out);
        }
        out
    }

    pub fn transfer_count(&self) -> usize {
        self.flatten().len()
    }

    pub fn group_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Transfer(_) => 0,
                Node::Group(group) => 1 + group.children.iter().map(count).sum::<usize>(),
            }
        }
        self.entries.iter().map(count).sum()
    }

    /// Expected gains over a 30-day month, from the daily averages of all
    /// positive transfers.
    pub fn monthly_gains(&self) -> f64 {
        self.monthly_sum(|amount| amount > 0)
    }

    /// Expected dumps over a 30-day month, as a positive magnitude.
    pub fn monthly_dumps(&self) -> f64 {
        self.monthly_sum(|amount| amount < 0)
    }

    pub fn monthly_balance(&self) -> f64 {
        self.monthly_gains() - self.monthly_dumps()
    }

    fn monthly_sum(&self, keep: impl Fn(super::Cents) -> bool) -> f64 {
        self.flatten()
            .iter()
            .filter(|t| keep(t.amount))
            .map(|t| t.daily_average())
            .sum::<f64>()
            * 30.0
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Schedule;

    use super::*;

    fn sample_portfolio() -> Portfolio {
        Portfolio::new(vec![
            Node::Group(Group::new(
                "Gains",
                vec![
                    Node::Transfer(
                        Transfer::gain("Salary", 60000, Schedule::Monthly { day: Some(28) })
                            .unwrap(),
                    ),
                    Node::Group(Group::new(
                        "Side",
                        vec![Node::Transfer(
                            Transfer::gain("SecondJob", 12000, Schedule::Weekly { weekday: None })
                                .unwrap(),
                        )],
                    )),
                ],
            )),
            Node::Transfer(
                Transfer::dump("Rental", 80000, Schedule::Monthly { day: Some(1) }).unwrap(),
            ),
        ])
    }

    #[test]
    fn test_flatten_is_depth_first_in_declaration_order() {
        let portfolio = sample_portfolio();
        let descriptions: Vec<&str> = portfolio
            .flatten()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Salary", "SecondJob", "Rental"]);
    }

    #[test]
    fn test_counts() {
        let portfolio = sample_portfolio();
        assert_eq!(portfolio.transfer_count(), 3);
        assert_eq!(portfolio.group_count(), 2);
        assert_eq!(Portfolio::default().transfer_count(), 0);
    }

    #[test]
    fn test_monthly_statistics_split_by_sign() {
        let portfolio = sample_portfolio();
        // Salary 600.00/month -> 2000 cents/day; SecondJob 120.00/week.
        let expected_gains = (2000.0 + 12000.0 / 7.0) * 30.0;
        let expected_dumps = (80000.0 / 30.0) * 30.0;
        assert!((portfolio.monthly_gains() - expected_gains).abs() < 1e-6);
        assert!((portfolio.monthly_dumps() - expected_dumps).abs() < 1e-6);
        assert!(
            (portfolio.monthly_balance() - (expected_gains - expected_dumps)).abs() < 1e-6
        );
    }

    #[test]
    fn test_group_daily_average_sums_children_regardless_of_sign() {
        let group = Group::new(
            "Mixed",
            vec![
                Node::Transfer(Transfer::gain("A", 700, Schedule::Weekly { weekday: None }).unwrap()),
                Node::Transfer(Transfer::dump("B", 300, Schedule::Daily).unwrap()),
            ],
        );
        assert!((group.daily_average() - (100.0 + 300.0)).abs() < 1e-9);
    }
}
