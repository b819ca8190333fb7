//! Solidity surfaces of the settlement contracts.
//!
//! Wire formats are fixed by the protocol and must match exactly for
//! interoperability; the `sol!` items below are the single source of truth
//! for them inside the SDK. Domain conversions live next to the operations
//! that use them (see `inbox`, `outbox`, `order`, `fill`).

use alloy::sol;

sol! {
	/// ERC-7683 output: 32-byte token/recipient identifiers keep the type
	/// address-format agnostic across chains.
	#[derive(Debug, PartialEq, Eq)]
	struct Output {
		bytes32 token;
		uint256 amount;
		bytes32 recipient;
		uint256 chainId;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct FillInstruction {
		uint64 destinationChainId;
		bytes32 destinationSettler;
		bytes originData;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct ResolvedCrossChainOrder {
		address user;
		uint256 originChainId;
		uint32 openDeadline;
		uint32 fillDeadline;
		bytes32 orderId;
		Output[] maxSpent;
		Output[] minReceived;
		FillInstruction[] fillInstructions;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct OnchainCrossChainOrder {
		uint32 fillDeadline;
		bytes32 orderDataType;
		bytes orderData;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct OrderState {
		uint8 status;
		uint8 rejectReason;
		uint32 timestamp;
		address updatedBy;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct Deposit {
		address token;
		uint96 amount;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct Call {
		address target;
		bytes4 selector;
		uint256 value;
		bytes params;
	}

	#[derive(Debug, PartialEq, Eq)]
	struct Expense {
		address spender;
		address token;
		uint96 amount;
	}

	/// The `orderData` payload behind the standard order-data type tag.
	#[derive(Debug, PartialEq, Eq)]
	struct OrderData {
		address owner;
		uint64 destChainId;
		Deposit deposit;
		Call[] calls;
		Expense[] expenses;
	}

	/// The `originData` payload a fill instruction hands to the settler.
	#[derive(Debug, PartialEq, Eq)]
	struct FillOriginData {
		uint64 srcChainId;
		uint64 destChainId;
		uint32 fillDeadline;
		Call[] calls;
		Expense[] expenses;
	}

	interface ISettlerInbox {
		function open(OnchainCrossChainOrder calldata order) external payable;

		function getOrder(bytes32 id)
			external
			view
			returns (ResolvedCrossChainOrder memory resolved, OrderState memory state, uint248 offset);

		event Open(bytes32 indexed orderId, ResolvedCrossChainOrder resolvedOrder);

		event Rejected(bytes32 indexed id, address indexed by, uint8 indexed reason);
	}

	interface ISettlerOutbox {
		function didFill(bytes32 orderId, bytes calldata originData) external view returns (bool filled);

		event Filled(bytes32 indexed orderId, bytes32 indexed fillHash, address indexed filledBy);
	}

	interface ISolverExecutor {
		function executeAndTransfer(address token, address to, address target, bytes calldata data)
			external
			payable;

		error CallFailed();
	}
}
