//! 월 총비용에서 각 비용 항목으로 흐르는 가중 방향 그래프.
//! 노드 순서와 링크 순서는 Sankey 렌더러에 그대로 넘길 수 있도록 고정되어 있다.

use super::breakdown::CostBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowNode {
    TotalMonthlyCost,
    LoanPayment,
    PrincipalPayment,
    InterestPayment,
    OperatorSalary,
    MachineInsurance,
    FuelCost,
    WarrantyService,
}

impl FlowNode {
    pub const ALL: [FlowNode; 8] = [
        FlowNode::TotalMonthlyCost,
        FlowNode::LoanPayment,
        FlowNode::PrincipalPayment,
        FlowNode::InterestPayment,
        FlowNode::OperatorSalary,
        FlowNode::MachineInsurance,
        FlowNode::FuelCost,
        FlowNode::WarrantyService,
    ];

    /// `ALL` 안에서의 위치.
    pub fn index(self) -> usize {
        self as usize
    }

    /// 렌더러용 기본(영문) 라벨.
    pub fn label(self) -> &'static str {
        match self {
            FlowNode::TotalMonthlyCost => "Total Monthly Cost",
            FlowNode::LoanPayment => "Loan Payment",
            FlowNode::PrincipalPayment => "Principal Payment",
            FlowNode::InterestPayment => "Interest Payment",
            FlowNode::OperatorSalary => "Operator Salary",
            FlowNode::MachineInsurance => "Machine Insurance",
            FlowNode::FuelCost => "Fuel Cost",
            FlowNode::WarrantyService => "Warranty and Service Package",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLink {
    pub source: FlowNode,
    pub target: FlowNode,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostFlow {
    links: Vec<FlowLink>,
}

impl CostFlow {
    pub fn nodes(&self) -> &'static [FlowNode] {
        &FlowNode::ALL
    }

    pub fn links(&self) -> &[FlowLink] {
        &self.links
    }

    /// 노드에서 나가는 값의 합.
    pub fn outflow(&self, node: FlowNode) -> f64 {
        self.links
            .iter()
            .filter(|l| l.source == node)
            .map(|l| l.value)
            .sum()
    }

    /// 노드로 들어오는 값의 합.
    pub fn inflow(&self, node: FlowNode) -> f64 {
        self.links
            .iter()
            .filter(|l| l.target == node)
            .map(|l| l.value)
            .sum()
    }

    /// (source 인덱스, target 인덱스, 값) 배열. Sankey 입력 형식.
    pub fn index_arrays(&self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        let sources = self.links.iter().map(|l| l.source.index()).collect();
        let targets = self.links.iter().map(|l| l.target.index()).collect();
        let values = self.links.iter().map(|l| l.value).collect();
        (sources, targets, values)
    }
}

/// 비용 명세로부터 흐름 그래프를 만든다.
pub fn cost_flow(breakdown: &CostBreakdown) -> CostFlow {
    use FlowNode::*;

    let link = |source, target, value| FlowLink {
        source,
        target,
        value,
    };
    CostFlow {
        links: vec![
            link(TotalMonthlyCost, LoanPayment, breakdown.monthly_payment),
            link(LoanPayment, PrincipalPayment, breakdown.principal_payment),
            link(LoanPayment, InterestPayment, breakdown.interest_payment),
            link(TotalMonthlyCost, OperatorSalary, breakdown.operator_salary),
            link(TotalMonthlyCost, MachineInsurance, breakdown.machine_insurance),
            link(TotalMonthlyCost, FuelCost, breakdown.monthly_fuel_cost),
            link(TotalMonthlyCost, WarrantyService, breakdown.warranty_service_monthly),
        ],
    }
}
