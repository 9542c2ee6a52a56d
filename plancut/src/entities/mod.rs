mod part;
mod placed_piece;
mod plan;
mod result;
mod scrap;
mod sheet;
mod unit;

#[doc(inline)]
pub use part::Hole;

#[doc(inline)]
pub use part::PartShape;

#[doc(inline)]
pub use part::PartSpec;

#[doc(inline)]
pub use unit::AllocationUnit;

#[doc(inline)]
pub use unit::UnitShape;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use plan::CuttingPlan;

#[doc(inline)]
pub use plan::PieceSummary;

#[doc(inline)]
pub use plan::PlanSignature;

#[doc(inline)]
pub use scrap::ScrapKind;

#[doc(inline)]
pub use scrap::ScrapRegion;

#[doc(inline)]
pub use result::AreaWeight;

#[doc(inline)]
pub use result::MaterialBreakdown;

#[doc(inline)]
pub use result::NestingResult;
